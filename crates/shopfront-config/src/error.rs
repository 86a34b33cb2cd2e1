//! Error types for configuration loading.

use thiserror::Error;

/// Primary error type for configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Environment variable that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Upstream URL was not an absolute http(s) URL.
    #[error("invalid upstream url")]
    InvalidUrl {
        /// URL payload provided by the caller.
        value: String,
    },
    /// Bind address value was invalid.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// Bind address payload provided by the caller.
        value: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_are_constant() {
        let invalid = ConfigError::InvalidField {
            field: "PORT",
            value: Some("abc".to_string()),
            reason: "not_a_number",
        };
        assert_eq!(invalid.to_string(), "invalid configuration field");
        assert_eq!(
            ConfigError::InvalidUrl {
                value: "ftp://x".to_string()
            }
            .to_string(),
            "invalid upstream url"
        );
        assert_eq!(
            ConfigError::InvalidBindAddr {
                value: "nowhere".to_string()
            }
            .to_string(),
            "invalid bind address"
        );
    }
}
