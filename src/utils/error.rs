use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Entrant list is empty: provide at least one non-blank name")]
    EmptyEntrants,

    #[error("Malformed seed '{seed}': expected exactly 8 hexadecimal characters")]
    MalformedSeed { seed: String },

    #[error("Draw not found: {id}")]
    NotFound { id: String },

    #[error("Stored draw '{id}' is unreadable: {reason}")]
    CorruptRecord { id: String, reason: String },

    #[error("Store operation failed: {message}")]
    StoreError { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LotteryError {
    /// True for the rejections raised before any shuffle work begins.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LotteryError::EmptyEntrants | LotteryError::MalformedSeed { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LotteryError::EmptyEntrants | LotteryError::MalformedSeed { .. } => {
                ErrorCategory::Input
            }
            LotteryError::NotFound { .. }
            | LotteryError::CorruptRecord { .. }
            | LotteryError::StoreError { .. } => ErrorCategory::Storage,
            LotteryError::HttpError(_) => ErrorCategory::Network,
            LotteryError::TomlError(_)
            | LotteryError::ConfigError { .. }
            | LotteryError::InvalidConfigValueError { .. }
            | LotteryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LotteryError::CsvError(_)
            | LotteryError::IoError(_)
            | LotteryError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // 遠端儲存可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage => match self {
                LotteryError::StoreError { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LotteryError::EmptyEntrants => {
                "Enter one name per line; blank lines are ignored".to_string()
            }
            LotteryError::MalformedSeed { .. } => {
                "Use 8 characters from 0-9 and A-F, e.g. 1A2B3C4D, or pass --random-seed"
                    .to_string()
            }
            LotteryError::NotFound { .. } => {
                "Check the draw id; saved draws expire after the retention window".to_string()
            }
            LotteryError::CorruptRecord { .. } => {
                "Re-run the draw from its original names and seed".to_string()
            }
            LotteryError::StoreError { .. } | LotteryError::HttpError(_) => {
                "Check store connectivity and credentials, then retry".to_string()
            }
            LotteryError::TomlError(_)
            | LotteryError::ConfigError { .. }
            | LotteryError::InvalidConfigValueError { .. }
            | LotteryError::MissingConfigError { .. } => {
                "Fix the configuration file or environment variables".to_string()
            }
            LotteryError::CsvError(_)
            | LotteryError::IoError(_)
            | LotteryError::SerializationError(_) => {
                "Check file permissions and available disk space".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Storage => format!("Could not access saved draw: {}", self),
            ErrorCategory::Network => format!("Could not reach the draw store: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_family() {
        assert!(LotteryError::EmptyEntrants.is_invalid_input());
        assert!(LotteryError::MalformedSeed {
            seed: "xyz".to_string()
        }
        .is_invalid_input());
        assert!(!LotteryError::NotFound {
            id: "abc".to_string()
        }
        .is_invalid_input());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(LotteryError::EmptyEntrants.severity(), ErrorSeverity::High);
        assert_eq!(
            LotteryError::StoreError {
                message: "timeout".to_string()
            }
            .severity(),
            ErrorSeverity::Medium
        );
        let io = LotteryError::from(std::io::Error::other("disk"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_message_keeps_reason_verbatim() {
        let err = LotteryError::MalformedSeed {
            seed: "1A2B3C4".to_string(),
        };
        assert!(err.user_friendly_message().contains("1A2B3C4"));
        assert_eq!(err.user_friendly_message(), err.to_string());
    }
}
