use crate::domain::ports::DrawStore;
use crate::utils::error::{LotteryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const URL_ENV: &str = "UPSTASH_REDIS_REST_URL";
pub const TOKEN_ENV: &str = "UPSTASH_REDIS_REST_TOKEN";

#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Redis through the Upstash REST protocol: each command is a JSON array POSTed to the base URL.
#[derive(Debug, Clone)]
pub struct UpstashStore {
    client: Client,
    url: String,
    token: String,
    timeout: Option<Duration>,
}

impl UpstashStore {
    pub fn new(url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            url,
            token,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn command(&self, args: &[&str]) -> Result<Option<serde_json::Value>> {
        tracing::debug!("📡 Upstash command {}", args.first().unwrap_or(&""));

        let mut request = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(args);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: CommandResponse = if status.is_success() {
            response.json().await?
        } else {
            // Upstash 錯誤回應也帶 JSON，解析失敗時只回報狀態碼
            match response.json::<CommandResponse>().await {
                Ok(body) if body.error.is_some() => body,
                _ => {
                    return Err(LotteryError::StoreError {
                        message: format!("Upstash request failed with status: {}", status),
                    })
                }
            }
        };

        if let Some(error) = body.error {
            return Err(LotteryError::StoreError {
                message: format!("Upstash error ({}): {}", status, error),
            });
        }

        Ok(body.result)
    }
}

#[async_trait]
impl DrawStore for UpstashStore {
    /// A zero TTL deletes the key, matching a write that is already expired.
    /// Sub-second TTLs round up to the one-second minimum of `EX`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        if ttl.is_zero() {
            tracing::debug!("Zero TTL for {}, deleting instead of SET", key);
            self.command(&["DEL", key]).await?;
            return Ok(());
        }

        let seconds = ttl.as_secs().max(1).to_string();
        match self.command(&["SET", key, value, "EX", &seconds]).await? {
            Some(serde_json::Value::String(reply)) if reply == "OK" => Ok(()),
            other => Err(LotteryError::StoreError {
                message: format!("Unexpected SET reply: {:?}", other),
            }),
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.command(&["GET", key]).await? {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(value)) => Ok(Some(value)),
            // 非字串值視為 JSON 物件原樣回傳
            Some(other) => Ok(Some(other.to_string())),
        }
    }
}
