use crate::core::lottery::compute_lottery;
use crate::domain::model::{DrawRecord, LotteryResult, SavedDraw};
use crate::domain::ports::DrawStore;
use crate::utils::error::{LotteryError, Result};
use crate::utils::ids::generate_draw_id;
use chrono::Utc;
use std::time::Duration;

pub const DEFAULT_KEY_PREFIX: &str = "lottery:";
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(60 * 60 * 24 * 7);

/// Draws, saves and replays lotteries over a `DrawStore`.
pub struct LotteryEngine<S: DrawStore> {
    store: S,
    key_prefix: String,
    retention: Duration,
}

impl<S: DrawStore> LotteryEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            retention: DEFAULT_RETENTION,
        }
    }

    pub fn with_settings(store: S, key_prefix: impl Into<String>, retention: Duration) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            retention,
        }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    fn key_for(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    pub fn draw(&self, entrant_text: &str, hex_seed: &str) -> Result<LotteryResult> {
        let result = compute_lottery(entrant_text, hex_seed)?;
        tracing::info!(
            "🎲 Drew {} entrants with seed {}: winner #{} {}",
            result.total_entrants(),
            result.seed(),
            result.winning_position(),
            result.winner()
        );
        Ok(result)
    }

    /// Computes first so rejected input never reaches the store.
    pub async fn save(&self, entrant_text: &str, hex_seed: &str) -> Result<SavedDraw> {
        let result = self.draw(entrant_text, hex_seed)?;

        let created_at = Utc::now();
        let expires_at = chrono::Duration::from_std(self.retention)
            .ok()
            .and_then(|retention| created_at.checked_add_signed(retention))
            .ok_or_else(|| LotteryError::ConfigError {
                message: format!("Retention out of range: {:?}", self.retention),
            })?;

        let record = DrawRecord {
            entrants: entrant_text.to_string(),
            seed: hex_seed.to_string(),
            created_at,
        };
        let payload = serde_json::to_string(&record)?;

        let id = generate_draw_id();
        let key = self.key_for(&id);
        tracing::debug!("Saving draw under key {}", key);
        self.store.put(&key, &payload, self.retention).await?;
        tracing::info!("💾 Saved draw {}", id);

        Ok(SavedDraw {
            id,
            result,
            expires_at,
        })
    }

    pub async fn load_record(&self, id: &str) -> Result<DrawRecord> {
        let key = self.key_for(id);
        tracing::debug!("Retrieving draw for key {}", key);

        let raw = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| LotteryError::NotFound { id: id.to_string() })?;

        serde_json::from_str(&raw).map_err(|e| LotteryError::CorruptRecord {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads the stored inputs and recomputes the identical result.
    pub async fn retrieve(&self, id: &str) -> Result<LotteryResult> {
        let record = self.load_record(id).await?;
        let result = compute_lottery(&record.entrants, &record.seed).map_err(|e| {
            LotteryError::CorruptRecord {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })?;
        tracing::info!(
            "🔁 Replayed draw {} from {}: winner #{} {}",
            id,
            record.created_at.to_rfc3339(),
            result.winning_position(),
            result.winner()
        );
        Ok(result)
    }
}
