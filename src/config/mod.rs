#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::{FileStore, MemoryStore, UpstashStore};
use crate::core::engine::LotteryEngine;
use crate::core::{ConfigProvider, DrawStore};
use crate::utils::error::{LotteryError, Result};

pub use toml_config::LotteryConfig;

/// Store backend selected by `store.backend`.
pub fn build_store(config: &LotteryConfig) -> Result<Box<dyn DrawStore>> {
    match config.store.backend.as_str() {
        "memory" => {
            tracing::warn!("Memory store selected: saved draws vanish when the process exits");
            Ok(Box::new(MemoryStore::new()))
        }
        "file" => Ok(Box::new(FileStore::new(config.store.path.clone()))),
        "upstash" => {
            let (url, token) = config.upstash_credentials()?;
            let mut store = UpstashStore::new(url, token);
            if let Some(timeout) = config.upstash_timeout() {
                store = store.with_timeout(timeout);
            }
            Ok(Box::new(store))
        }
        other => Err(LotteryError::ConfigError {
            message: format!("Unknown store backend: {}", other),
        }),
    }
}

pub fn build_engine(config: &LotteryConfig) -> Result<LotteryEngine<Box<dyn DrawStore>>> {
    let store = build_store(config)?;
    Ok(LotteryEngine::with_settings(
        store,
        config.key_prefix(),
        config.retention(),
    ))
}
