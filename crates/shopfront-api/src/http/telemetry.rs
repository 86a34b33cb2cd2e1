//! HTTP metrics middleware: per-route request counts and request context scoping.
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};

use axum::extract::MatchedPath;
use axum::http::Request;
use shopfront_telemetry::{Metrics, with_request_context};
use tower::{Layer, Service};

use crate::http::constants::HEADER_REQUEST_ID;

/// Wraps route services so each response increments `http_requests_total{route,code}`.
#[derive(Clone)]
pub(crate) struct HttpMetricsLayer {
    telemetry: Metrics,
}

impl HttpMetricsLayer {
    pub(crate) const fn new(telemetry: Metrics) -> Self {
        Self { telemetry }
    }
}

impl<S> Layer<S> for HttpMetricsLayer {
    type Service = HttpMetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpMetricsService {
            inner,
            telemetry: self.telemetry.clone(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct HttpMetricsService<S> {
    inner: S,
    telemetry: Metrics,
}

impl<S, B> Service<Request<B>> for HttpMetricsService<S>
where
    S: Service<Request<B>, Response = axum::response::Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let route = req.extensions().get::<MatchedPath>().map_or_else(
            || req.uri().path().to_string(),
            |matched| matched.as_str().to_string(),
        );
        let request_id = req
            .headers()
            .get(HEADER_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let telemetry = self.telemetry.clone();
        let fut = self.inner.call(req);

        Box::pin(async move {
            with_request_context(request_id, async move {
                let response = fut.await?;
                telemetry.inc_http_request(&route, response.status().as_u16());
                Ok(response)
            })
            .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::response::Response;
    use shopfront_telemetry::current_request_id;
    use std::convert::Infallible;
    use std::error::Error;
    use tower::ServiceExt;
    use tower::service_fn;

    #[tokio::test]
    async fn counts_requests_and_exposes_request_id() -> Result<(), Box<dyn Error>> {
        let telemetry = Metrics::new()?;
        let inner = service_fn(|_req: Request<Body>| async {
            assert_eq!(current_request_id().as_deref(), Some("req-7"));
            Ok::<_, Infallible>(Response::new(Body::empty()))
        });
        let service = HttpMetricsLayer::new(telemetry.clone()).layer(inner);

        let request = Request::builder()
            .uri("/products")
            .header(HEADER_REQUEST_ID, "req-7")
            .body(Body::empty())?;
        let response = service.oneshot(request).await?;
        assert_eq!(response.status().as_u16(), 200);

        let rendered = telemetry.render()?;
        assert!(rendered.contains(r#"http_requests_total{code="200",route="/products"} 1"#));
        Ok(())
    }
}
