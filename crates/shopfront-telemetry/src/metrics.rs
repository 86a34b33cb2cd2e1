//! Prometheus-backed metrics registry and snapshot helpers.
//!
//! # Design
//! - Encapsulates collector registration to keep the public API small.
//! - Exposes only the counters the catalog proxy records.

use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use serde::Serialize;

use crate::error::{Result, TelemetryError};

/// Prometheus-backed metrics registry shared across services.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    upstream_fetch_failures_total: IntCounter,
    upstream_fetch_latency_ms: IntGauge,
    products_served_total: IntCounter,
}

/// Snapshot of selected counters for diagnostics and tests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total count of failed upstream fetches.
    pub upstream_fetch_failures_total: u64,
    /// Latency (ms) of the most recent upstream fetch.
    pub upstream_fetch_latency_ms: i64,
    /// Total products returned to clients.
    pub products_served_total: u64,
}

impl Metrics {
    /// Construct a new metrics registry with the standard collectors registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the Prometheus collectors cannot be
    /// built or registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests received"),
            &["route", "code"],
        )
        .map_err(|source| TelemetryError::MetricsCollector {
            name: "http_requests_total",
            source,
        })?;
        let upstream_fetch_failures_total = IntCounter::with_opts(Opts::new(
            "upstream_fetch_failures_total",
            "Upstream catalog fetches that failed",
        ))
        .map_err(|source| TelemetryError::MetricsCollector {
            name: "upstream_fetch_failures_total",
            source,
        })?;
        let upstream_fetch_latency_ms = IntGauge::with_opts(Opts::new(
            "upstream_fetch_latency_ms",
            "Latency of the most recent upstream catalog fetch (ms)",
        ))
        .map_err(|source| TelemetryError::MetricsCollector {
            name: "upstream_fetch_latency_ms",
            source,
        })?;
        let products_served_total = IntCounter::with_opts(Opts::new(
            "products_served_total",
            "Products returned to clients",
        ))
        .map_err(|source| TelemetryError::MetricsCollector {
            name: "products_served_total",
            source,
        })?;

        register(&registry, "http_requests_total", &http_requests_total)?;
        register(
            &registry,
            "upstream_fetch_failures_total",
            &upstream_fetch_failures_total,
        )?;
        register(
            &registry,
            "upstream_fetch_latency_ms",
            &upstream_fetch_latency_ms,
        )?;
        register(&registry, "products_served_total", &products_served_total)?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                upstream_fetch_failures_total,
                upstream_fetch_latency_ms,
                products_served_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        let code = status.to_string();
        self.inner
            .http_requests_total
            .with_label_values(&[route, code.as_str()])
            .inc();
    }

    /// Increment the upstream failure counter.
    pub fn inc_upstream_failure(&self) {
        self.inner.upstream_fetch_failures_total.inc();
    }

    /// Record the latency of the latest upstream fetch.
    pub fn observe_upstream_latency(&self, duration: Duration) {
        self.inner
            .upstream_fetch_latency_ms
            .set(Self::duration_to_ms(duration));
    }

    /// Add to the count of products returned to clients.
    pub fn add_products_served(&self, count: usize) {
        self.inner
            .products_served_total
            .inc_by(u64::try_from(count).unwrap_or(u64::MAX));
    }

    /// Render the metrics registry using the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics cannot be encoded or if the encoded
    /// buffer is not valid UTF-8.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|source| TelemetryError::MetricsEncode { source })?;
        String::from_utf8(buffer).map_err(|source| TelemetryError::MetricsUtf8 { source })
    }

    /// Take a point-in-time snapshot of the proxy counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            upstream_fetch_failures_total: self.inner.upstream_fetch_failures_total.get(),
            upstream_fetch_latency_ms: self.inner.upstream_fetch_latency_ms.get(),
            products_served_total: self.inner.products_served_total.get(),
        }
    }

    /// Convert a duration to milliseconds saturating at `i64::MAX`.
    pub(crate) fn duration_to_ms(duration: Duration) -> i64 {
        i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
    }
}

fn register<C>(registry: &Registry, name: &'static str, collector: &C) -> Result<()>
where
    C: prometheus::core::Collector + Clone + 'static,
{
    registry
        .register(Box::new(collector.clone()))
        .map_err(|source| TelemetryError::MetricsRegister { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn duration_to_ms_saturates_on_large_values() {
        let duration = Duration::from_secs(u64::MAX / 2);
        assert_eq!(Metrics::duration_to_ms(duration), i64::MAX);
    }

    #[test]
    fn metrics_snapshot_reflects_updates() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/products", 200);
        metrics.inc_http_request("/products", 500);
        metrics.inc_upstream_failure();
        metrics.observe_upstream_latency(Duration::from_millis(120));
        metrics.add_products_served(30);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.upstream_fetch_failures_total, 1);
        assert_eq!(snapshot.upstream_fetch_latency_ms, 120);
        assert_eq!(snapshot.products_served_total, 30);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("upstream_fetch_failures_total"));
        assert!(rendered.contains(r#"code="500""#));
        Ok(())
    }

    #[test]
    fn snapshot_serializes_with_field_names() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let metrics = Metrics::new()?;
        metrics.add_products_served(4);
        let value = serde_json::to_value(metrics.snapshot())?;
        assert_eq!(value["products_served_total"], 4);
        assert_eq!(value["upstream_fetch_failures_total"], 0);
        Ok(())
    }

    #[test]
    fn registries_are_independent() -> Result<()> {
        let first = Metrics::new()?;
        let second = Metrics::new()?;
        first.inc_upstream_failure();
        assert_eq!(second.snapshot().upstream_fetch_failures_total, 0);
        Ok(())
    }
}
