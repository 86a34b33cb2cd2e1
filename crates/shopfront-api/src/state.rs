//! Shared state handed to every handler.

use shopfront_telemetry::Metrics;

use crate::upstream::SharedCatalog;

pub(crate) struct ApiState {
    pub(crate) catalog: SharedCatalog,
    pub(crate) telemetry: Metrics,
}

impl ApiState {
    pub(crate) fn new(catalog: SharedCatalog, telemetry: Metrics) -> Self {
        Self { catalog, telemetry }
    }
}
