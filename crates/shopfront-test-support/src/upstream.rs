//! Fake upstream catalog served from an ephemeral local port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: Arc<str>,
    hits: Arc<AtomicUsize>,
}

/// Handle to a running fake upstream; the server stops when dropped.
pub struct FakeUpstream {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl FakeUpstream {
    /// Serve `body` as JSON with status 200 on `/products`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn json(body: &Value) -> Result<Self> {
        Self::raw(StatusCode::OK, body.to_string()).await
    }

    /// Serve an arbitrary body and status on `/products`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn raw(status: StatusCode, body: impl Into<String>) -> Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let canned = Canned {
            status,
            body: Arc::from(body.into()),
            hits: Arc::clone(&hits),
        };
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind fake upstream")?;
        let addr = listener
            .local_addr()
            .context("failed to read fake upstream address")?;
        let router = Router::new()
            .route("/products", get(respond))
            .with_state(canned);
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(Self { addr, hits, task })
    }

    /// Full URL of the fake `/products` endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}/products", self.addr)
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn respond(State(canned): State<Canned>) -> impl IntoResponse {
    canned.hits.fetch_add(1, Ordering::SeqCst);
    (
        canned.status,
        [(CONTENT_TYPE, "application/json")],
        canned.body.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_upstream_payload;

    #[tokio::test]
    async fn serves_canned_body_and_counts_hits() -> Result<()> {
        let upstream = FakeUpstream::json(&sample_upstream_payload()).await?;
        let response = reqwest::get(upstream.url()).await?;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await?;
        assert_eq!(body, sample_upstream_payload());
        assert_eq!(upstream.hits(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn serves_configured_status() -> Result<()> {
        let upstream = FakeUpstream::raw(StatusCode::BAD_GATEWAY, "{}").await?;
        let response = reqwest::get(upstream.url()).await?;
        assert_eq!(response.status().as_u16(), 502);
        Ok(())
    }
}
