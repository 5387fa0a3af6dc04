use crate::core::shuffle::seeded_shuffle;
use crate::domain::model::{EntrantList, LotteryResult, Seed};
use crate::utils::error::{LotteryError, Result};

/// Splits on newlines, trims each line and drops blank ones.
pub fn parse_entrants(text: &str) -> Result<EntrantList> {
    let names = text
        .split('\n')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    EntrantList::new(names)
}

/// `(value mod n) + 1`, or `None` for an empty list.
pub fn winning_position(seed_value: u32, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some((seed_value as usize % total) + 1)
}

/// Picks the winner from an already shuffled list: 1-based position and entry.
pub fn select_winner<'a, T>(hex_seed: &str, shuffled: &'a [T]) -> Result<(usize, &'a T)> {
    let seed = Seed::parse(hex_seed)?;
    let position =
        winning_position(seed.value(), shuffled.len()).ok_or(LotteryError::EmptyEntrants)?;
    Ok((position, &shuffled[position - 1]))
}

/// Full draw from raw entrant text and raw seed text. Pure: no I/O, no shared state.
pub fn compute_lottery(entrant_text: &str, hex_seed: &str) -> Result<LotteryResult> {
    let entrants = parse_entrants(entrant_text)?;
    let seed = Seed::parse(hex_seed)?;
    Ok(draw(&entrants, &seed))
}

/// Draw over validated inputs; cannot fail.
pub fn draw(entrants: &EntrantList, seed: &Seed) -> LotteryResult {
    let shuffled = seeded_shuffle(entrants.names(), seed.value());
    // EntrantList is never empty
    let position = (seed.value() as usize % shuffled.len()) + 1;
    let winner = shuffled[position - 1].clone();

    tracing::debug!(
        "Drew position {} of {} with seed {} ({})",
        position,
        shuffled.len(),
        seed,
        seed.value()
    );

    LotteryResult::new(shuffled, seed, position, winner)
}
