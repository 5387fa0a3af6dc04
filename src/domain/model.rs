use crate::utils::error::{LotteryError, Result};
use crate::utils::validation::is_hex_seed;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-hex-digit seed together with its unsigned value.
///
/// The original text is kept as entered (case included) so results echo the
/// seed exactly as the user shared it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    text: String,
    value: u32,
}

impl Seed {
    pub fn parse(raw: &str) -> Result<Self> {
        if !is_hex_seed(raw) {
            return Err(LotteryError::MalformedSeed {
                seed: raw.to_string(),
            });
        }
        let value = u32::from_str_radix(raw, 16).map_err(|_| LotteryError::MalformedSeed {
            seed: raw.to_string(),
        })?;
        Ok(Self {
            text: raw.to_string(),
            value,
        })
    }

    /// Fresh uppercase seed from the thread RNG. Only the choice of seed is random.
    pub fn random() -> Self {
        let value: u32 = rand::thread_rng().gen();
        Self {
            text: format!("{:08X}", value),
            value,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl FromStr for Seed {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered, non-empty list of entrant names. Duplicates are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrantList {
    names: Vec<String>,
}

impl EntrantList {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(LotteryError::EmptyEntrants);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledEntrant {
    pub position: usize,
    pub name: String,
}

/// Outcome of one draw. Built once by the core and never mutated afterwards.
/// Serialize-only: a result is rebuilt from its `DrawRecord`, never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotteryResult {
    shuffled_entrants: Vec<ShuffledEntrant>,
    seed: String,
    decimal_value: u32,
    total_entrants: usize,
    winning_position: usize,
    winner: String,
}

impl LotteryResult {
    pub(crate) fn new(
        shuffled: Vec<String>,
        seed: &Seed,
        winning_position: usize,
        winner: String,
    ) -> Self {
        let total_entrants = shuffled.len();
        let shuffled_entrants = shuffled
            .into_iter()
            .enumerate()
            .map(|(i, name)| ShuffledEntrant {
                position: i + 1,
                name,
            })
            .collect();

        Self {
            shuffled_entrants,
            seed: seed.as_str().to_string(),
            decimal_value: seed.value(),
            total_entrants,
            winning_position,
            winner,
        }
    }

    pub fn shuffled_entrants(&self) -> &[ShuffledEntrant] {
        &self.shuffled_entrants
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn decimal_value(&self) -> u32 {
        self.decimal_value
    }

    pub fn total_entrants(&self) -> usize {
        self.total_entrants
    }

    /// 1-based.
    pub fn winning_position(&self) -> usize {
        self.winning_position
    }

    pub fn winner(&self) -> &str {
        &self.winner
    }
}

/// Inputs of a draw as persisted behind an id; the result is recomputed on retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub entrants: String,
    pub seed: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDraw {
    pub id: String,
    pub result: LotteryResult,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parse_keeps_text_and_value() {
        let seed = Seed::parse("1a2B3c4D").unwrap();
        assert_eq!(seed.as_str(), "1a2B3c4D");
        assert_eq!(seed.value(), 0x1A2B_3C4D);
        assert_eq!(seed.to_string(), "1a2B3c4D");

        assert_eq!(Seed::parse("FFFFFFFF").unwrap().value(), u32::MAX);
        assert_eq!(Seed::parse("00000000").unwrap().value(), 0);
    }

    #[test]
    fn test_seed_rejects_malformed() {
        for bad in ["1A2B3C4", "1A2B3C4G", "", "+1A2B3C4", "0x1A2B3C", "1A2B3C4D "] {
            match Seed::parse(bad) {
                Err(LotteryError::MalformedSeed { seed }) => assert_eq!(seed, bad),
                other => panic!("expected MalformedSeed for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_random_seed_round_trips_through_parse() {
        for _ in 0..16 {
            let seed = Seed::random();
            assert_eq!(seed.as_str().len(), 8);
            assert_eq!(Seed::parse(seed.as_str()).unwrap(), seed);
        }
    }

    #[test]
    fn test_entrant_list_rejects_empty() {
        assert!(matches!(
            EntrantList::new(vec![]),
            Err(LotteryError::EmptyEntrants)
        ));
        let list = EntrantList::new(vec!["a".to_string(), "a".to_string()]).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_result_serializes_with_consistent_winner() {
        let seed = Seed::parse("0000000B").unwrap();
        let result = LotteryResult::new(
            vec!["y".to_string(), "z".to_string(), "x".to_string()],
            &seed,
            3,
            "x".to_string(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["seed"], "0000000B");
        assert_eq!(json["decimal_value"], 11);
        assert_eq!(json["total_entrants"], 3);
        assert_eq!(json["winning_position"], 3);
        assert_eq!(json["winner"], "x");
        assert_eq!(json["shuffled_entrants"][2]["name"], "x");
        assert_eq!(json["shuffled_entrants"][2]["position"], 3);
    }
}
