use crate::adapters::upstash_store::{TOKEN_ENV, URL_ENV};
use crate::core::engine::{DEFAULT_KEY_PREFIX, DEFAULT_RETENTION};
use crate::core::report::ExportFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const STORE_BACKENDS: [&str; 3] = ["memory", "file", "upstash"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
/// Ten years.
pub const MAX_TTL_SECONDS: u64 = 60 * 60 * 24 * 3650;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotteryConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: String,
    pub path: String,
    pub ttl_seconds: u64,
    pub key_prefix: String,
    pub upstash: Option<UpstashConfig>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            path: "./draws".to_string(),
            ttl_seconds: DEFAULT_RETENTION.as_secs(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            upstash: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstashConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "./output".to_string(),
            formats: vec!["txt".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl LotteryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// `${VAR}` is replaced from the environment; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("store.backend", &self.store.backend, &STORE_BACKENDS)?;
        validation::validate_range(
            "store.ttl_seconds",
            self.store.ttl_seconds,
            1,
            MAX_TTL_SECONDS,
        )?;
        validation::validate_non_empty_string("store.key_prefix", &self.store.key_prefix)?;

        match self.store.backend.as_str() {
            "file" => validation::validate_path("store.path", &self.store.path)?,
            "upstash" => {
                let (url, _) = self.upstash_credentials()?;
                validation::validate_url("store.upstash.url", &url)?;
                let timeout = self.store.upstash.as_ref().and_then(|u| u.timeout_seconds);
                if let Some(timeout) = timeout {
                    validation::validate_positive_number(
                        "store.upstash.timeout_seconds",
                        timeout,
                        1,
                    )?;
                }
            }
            _ => {}
        }

        validation::validate_path("output.directory", &self.output.directory)?;
        self.parsed_export_formats()?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    /// Config values first, then `UPSTASH_REDIS_REST_URL` / `UPSTASH_REDIS_REST_TOKEN`.
    pub fn upstash_credentials(&self) -> Result<(String, String)> {
        let section = self.store.upstash.clone().unwrap_or_default();
        let url = section.url.or_else(|| std::env::var(URL_ENV).ok());
        let token = section.token.or_else(|| std::env::var(TOKEN_ENV).ok());

        let url = validation::validate_required_field("store.upstash.url", &url)?.clone();
        let token = validation::validate_required_field("store.upstash.token", &token)?.clone();
        Ok((url, token))
    }

    pub fn upstash_timeout(&self) -> Option<Duration> {
        self.store
            .upstash
            .as_ref()
            .and_then(|u| u.timeout_seconds)
            .map(Duration::from_secs)
    }

    pub fn parsed_export_formats(&self) -> Result<Vec<ExportFormat>> {
        self.output
            .formats
            .iter()
            .map(|f| f.parse::<ExportFormat>())
            .collect()
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for LotteryConfig {
    fn retention(&self) -> Duration {
        Duration::from_secs(self.store.ttl_seconds)
    }

    fn key_prefix(&self) -> &str {
        &self.store.key_prefix
    }

    fn output_directory(&self) -> &str {
        &self.output.directory
    }

    fn export_formats(&self) -> &[String] {
        &self.output.formats
    }
}

impl Validate for LotteryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
