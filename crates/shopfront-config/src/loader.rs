//! Environment-backed configuration loader.
//!
//! # Design
//! - Read every setting through a lookup closure so tests never touch the process env.
//! - Apply defaults for absent values; reject present-but-invalid values.

use std::net::{IpAddr, Ipv4Addr};

use tracing::debug;

use crate::error::ConfigResult;
use crate::model::ProxyConfig;
use crate::validate::{
    flag_value, parse_bind_addr, parse_port, parse_timeout_secs, parse_upstream_url,
};

/// Listen port variable.
pub const ENV_PORT: &str = "PORT";
/// Listen address variable.
pub const ENV_BIND_ADDR: &str = "SHOPFRONT_BIND_ADDR";
/// Upstream product list URL variable.
pub const ENV_UPSTREAM_URL: &str = "SHOPFRONT_UPSTREAM_URL";
/// Upstream request timeout (whole seconds) variable.
pub const ENV_UPSTREAM_TIMEOUT_SECS: &str = "SHOPFRONT_UPSTREAM_TIMEOUT_SECS";
/// Toggle for the `/metrics` route.
pub const ENV_METRICS: &str = "SHOPFRONT_METRICS";
/// Log format override (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "SHOPFRONT_LOG_FORMAT";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Address used when `SHOPFRONT_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Upstream catalog used when `SHOPFRONT_UPSTREAM_URL` is unset.
pub const DEFAULT_UPSTREAM_URL: &str = "https://dummyjson.com/products";

impl ProxyConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let http_port = get(ENV_PORT)
            .map(|value| parse_port(&value, ENV_PORT))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);
        let bind_addr = get(ENV_BIND_ADDR)
            .map(|value| parse_bind_addr(&value))
            .transpose()?
            .unwrap_or(DEFAULT_BIND_ADDR);
        let upstream_url = get(ENV_UPSTREAM_URL)
            .map(|value| parse_upstream_url(&value))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_timeout = get(ENV_UPSTREAM_TIMEOUT_SECS)
            .map(|value| parse_timeout_secs(&value, ENV_UPSTREAM_TIMEOUT_SECS))
            .transpose()?;
        let metrics_enabled = flag_value(get(ENV_METRICS).as_deref());
        let log_format = get(ENV_LOG_FORMAT).map(|value| value.trim().to_ascii_lowercase());

        let config = Self {
            bind_addr,
            http_port,
            upstream_url,
            upstream_timeout,
            metrics_enabled,
            log_format,
        };
        debug!(
            port = config.http_port,
            upstream = %config.upstream_url,
            metrics = config.metrics_enabled,
            "proxy configuration loaded"
        );
        Ok(config)
    }
}
