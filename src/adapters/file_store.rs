use crate::domain::ports::DrawStore;
use crate::utils::error::{LotteryError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    value: String,
    expires_at: DateTime<Utc>,
}

/// One JSON file per key under `base_path`. Expired files are deleted when read.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: String,
}

impl FileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", encode_key(key)))
    }
}

// 檔名只保留安全字元，其餘以 ~xx 編碼
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => encoded.push(byte as char),
            other => encoded.push_str(&format!("~{:02x}", other)),
        }
    }
    encoded
}

#[async_trait]
impl DrawStore for FileStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| LotteryError::StoreError {
                message: format!("TTL out of range: {:?}", ttl),
            })?;
        let envelope = Envelope {
            value: value.to_string(),
            expires_at,
        };

        let full_path = self.path_for(key);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, serde_json::to_vec(&envelope)?)?;
        tracing::debug!("Wrote {}", full_path.display());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key);
        let data = match fs::read(&full_path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let envelope: Envelope = serde_json::from_slice(&data)?;
        if Utc::now() >= envelope.expires_at {
            tracing::warn!("Draw file {} expired, removing", full_path.display());
            if let Err(e) = fs::remove_file(&full_path) {
                tracing::warn!("Could not remove {}: {}", full_path.display(), e);
            }
            return Ok(None);
        }

        Ok(Some(envelope.value))
    }
}
