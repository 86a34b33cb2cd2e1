//! Router construction and server host for the catalog proxy.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, Request},
    routing::get,
};
use shopfront_telemetry::{Metrics, build_sha, set_request_context};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{HEADER_REQUEST_ID, ROUTE_METRICS, ROUTE_PRODUCTS};
use crate::http::metrics::metrics;
use crate::http::products::list_products;
use crate::http::telemetry::HttpMetricsLayer;
use crate::state::ApiState;
use crate::upstream::SharedCatalog;

/// Optional surfaces of the proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerOptions {
    /// Mount `GET /metrics`.
    pub metrics_enabled: bool,
}

/// Axum router wrapper that hosts the catalog proxy.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Wire the catalog source and telemetry into the router and middleware stack.
    #[must_use]
    pub fn new(catalog: SharedCatalog, telemetry: Metrics, options: ServerOptions) -> Self {
        let state = Arc::new(ApiState::new(catalog, telemetry.clone()));
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                let span = tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = tracing::field::Empty,
                    request_id = tracing::field::Empty,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                );
                set_request_context(&span, request_id, request.uri().path());
                span
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(shopfront_telemetry::set_request_id_layer())
            .layer(shopfront_telemetry::propagate_request_id_layer())
            .layer(trace_layer)
            .layer(HttpMetricsLayer::new(telemetry));

        let router = Self::build_router(options)
            .route_layer(layered)
            .layer(cors_layer)
            .with_state(state);

        Self { router }
    }

    fn build_router(options: ServerOptions) -> Router<Arc<ApiState>> {
        let router = Router::new().route(ROUTE_PRODUCTS, get(list_products));
        if options.metrics_enabled {
            router.route(ROUTE_METRICS, get(metrics))
        } else {
            router
        }
    }

    /// Consume the server and hand back the fully layered router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Bind `addr` and serve until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the server terminates unexpectedly.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ApiServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(local) = listener.local_addr() {
            tracing::info!(addr = %local, "catalog proxy listening");
        }
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ApiServerError::Serve { source })?;
        tracing::info!("catalog proxy stopped");
        Ok(())
    }
}
