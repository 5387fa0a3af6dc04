pub mod engine;
pub mod lcg;
pub mod lottery;
pub mod report;
pub mod shuffle;

pub use crate::domain::model::{DrawRecord, EntrantList, LotteryResult, SavedDraw, Seed};
pub use crate::domain::ports::{ConfigProvider, DrawStore};
pub use crate::utils::error::Result;
