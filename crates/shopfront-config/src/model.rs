//! Typed configuration models.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Runtime configuration for the catalog proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: IpAddr,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
    /// Absolute URL of the upstream product list.
    pub upstream_url: String,
    /// Optional per-request timeout for the upstream call.
    pub upstream_timeout: Option<Duration>,
    /// Whether `/metrics` is mounted.
    pub metrics_enabled: bool,
    /// Requested log format (`json` or `pretty`), inferred when absent.
    pub log_format: Option<String>,
}

impl ProxyConfig {
    /// Socket address the API listener should bind to.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}
