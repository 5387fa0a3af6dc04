use crate::utils::error::{LotteryError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static HEX_SEED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{8}$").expect("hex seed pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Exactly 8 hexadecimal characters, either case. No surrounding whitespace.
pub fn is_hex_seed(value: &str) -> bool {
    HEX_SEED.is_match(value)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LotteryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LotteryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_seed() {
        assert!(is_hex_seed("1A2B3C4D"));
        assert!(is_hex_seed("deadbeef"));
        assert!(is_hex_seed("00000000"));
        assert!(!is_hex_seed("1A2B3C4"));
        assert!(!is_hex_seed("1A2B3C4G"));
        assert!(!is_hex_seed("1A2B3C4D5"));
        assert!(!is_hex_seed(" 1A2B3C4D"));
        assert!(!is_hex_seed(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("store.upstash.url", "https://example.upstash.io").is_ok());
        assert!(validate_url("store.upstash.url", "http://localhost:8080").is_ok());
        assert!(validate_url("store.upstash.url", "").is_err());
        assert!(validate_url("store.upstash.url", "invalid-url").is_err());
        assert!(validate_url("store.upstash.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("store.ttl_seconds", 60, 1).is_ok());
        assert!(validate_positive_number("store.ttl_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("store.ttl_seconds", 1u64, 1, 3600).is_ok());
        assert!(validate_range("store.ttl_seconds", 3600u64, 1, 3600).is_ok());
        assert!(validate_range("store.ttl_seconds", 0u64, 1, 3600).is_err());
        match validate_range("store.ttl_seconds", 3601u64, 1, 3600) {
            Err(LotteryError::InvalidConfigValueError { field, reason, .. }) => {
                assert_eq!(field, "store.ttl_seconds");
                assert!(reason.contains("between 1 and 3600"));
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("store.backend", "file", &["memory", "file"]).is_ok());
        assert!(validate_one_of("store.backend", "redis", &["memory", "file"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("store.upstash.token", &missing),
            Err(LotteryError::MissingConfigError { .. })
        ));
        let present = Some("token".to_string());
        assert_eq!(
            validate_required_field("store.upstash.token", &present).unwrap(),
            "token"
        );
    }
}
