//! Validation and parsing helpers for environment values.

use std::net::IpAddr;
use std::time::Duration;

use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Parse a listen port, rejecting zero and anything outside `u16`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not a port in `1..=65535`.
pub fn parse_port(value: &str, field: &'static str) -> ConfigResult<u16> {
    let port = value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            value: Some(value.to_string()),
            reason: "not_a_port",
        })?;
    if port == 0 {
        return Err(ConfigError::InvalidField {
            field,
            value: Some(value.to_string()),
            reason: "zero",
        });
    }
    Ok(port)
}

/// Parse an IP bind address.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBindAddr`] when the value is not an IP address.
pub fn parse_bind_addr(value: &str) -> ConfigResult<IpAddr> {
    value
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr {
            value: value.to_string(),
        })
}

/// Accept only absolute `http://` or `https://` URLs with a host part.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] when the value is malformed, uses another
/// scheme, or has no host.
pub fn parse_upstream_url(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    let invalid = || ConfigError::InvalidUrl {
        value: value.to_string(),
    };
    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(invalid()),
    }
}

/// Parse a whole-second timeout; `0` is rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not a positive integer.
pub fn parse_timeout_secs(value: &str, field: &'static str) -> ConfigResult<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidField {
            field,
            value: Some(value.to_string()),
            reason: "zero",
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(ConfigError::InvalidField {
            field,
            value: Some(value.to_string()),
            reason: "not_a_number",
        }),
    }
}

/// Interpret common truthy spellings; everything else is `false`.
#[must_use]
pub fn flag_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
