#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Environment-backed configuration for the catalog proxy.
//!
//! Layout: `model.rs` (typed `ProxyConfig`), `validate.rs` (parsing helpers),
//! `loader.rs` (environment lookup and defaults), `error.rs` (`ConfigError`).

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_UPSTREAM_URL, ENV_BIND_ADDR, ENV_LOG_FORMAT,
    ENV_METRICS, ENV_PORT, ENV_UPSTREAM_TIMEOUT_SECS, ENV_UPSTREAM_URL,
};
pub use model::ProxyConfig;
