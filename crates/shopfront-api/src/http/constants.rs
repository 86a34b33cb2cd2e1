//! Shared HTTP constants (headers, route paths).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const ROUTE_PRODUCTS: &str = "/products";
pub(crate) const ROUTE_METRICS: &str = "/metrics";

pub(crate) const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";
