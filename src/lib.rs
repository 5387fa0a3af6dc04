pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileStore, MemoryStore, UpstashStore};
pub use config::LotteryConfig;
pub use crate::core::{
    engine::LotteryEngine,
    lottery::{compute_lottery, parse_entrants, select_winner},
    report::ExportFormat,
};
pub use domain::model::{DrawRecord, EntrantList, LotteryResult, SavedDraw, Seed, ShuffledEntrant};
pub use domain::ports::DrawStore;
pub use utils::error::{LotteryError, Result};
