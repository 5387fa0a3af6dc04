use crate::domain::ports::DrawStore;
use crate::utils::error::{LotteryError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    // None when the TTL overflows the clock: never expires
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries.lock().map_err(|_| LotteryError::StoreError {
            message: "memory store lock poisoned".to_string(),
        })
    }

    /// Number of entries still held, expired ones included until next read.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DrawStore for MemoryStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now().checked_add(ttl),
        };
        self.lock()?.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            None => return Ok(None),
            Some(entry) if entry.is_live(Instant::now()) => {
                return Ok(Some(entry.value.clone()))
            }
            Some(_) => {}
        }

        tracing::debug!("Entry {} expired, removing", key);
        entries.remove(key);
        Ok(None)
    }
}
