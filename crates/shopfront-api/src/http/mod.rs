//! HTTP surface modules (router, handlers, middleware).

/// Shared constants and header names.
pub(crate) mod constants;
/// JSON error responses.
pub(crate) mod errors;
/// Prometheus exposition endpoint.
pub(crate) mod metrics;
/// Product listing handler.
pub(crate) mod products;
/// Router construction and server host.
pub mod router;
/// Metrics middleware for HTTP requests.
pub(crate) mod telemetry;
