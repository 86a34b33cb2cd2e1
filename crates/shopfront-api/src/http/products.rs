//! `GET /products`: proxy the upstream catalog in its reduced shape.

use std::sync::Arc;
use std::time::Instant;

use axum::{Json, extract::State};
use shopfront_api_models::ProductListResponse;
use shopfront_telemetry::current_request_id;
use tracing::{debug, warn};

use crate::http::errors::ApiError;
use crate::state::ApiState;

pub(crate) async fn list_products(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let started = Instant::now();
    let result = state.catalog.list_products().await;
    state.telemetry.observe_upstream_latency(started.elapsed());

    match result {
        Ok(products) => {
            debug!(count = products.len(), "upstream catalog fetched");
            state.telemetry.add_products_served(products.len());
            Ok(Json(ProductListResponse { products }))
        }
        Err(err) => {
            state.telemetry.inc_upstream_failure();
            warn!(
                error = %err,
                stage = err.stage(),
                upstream = err.url(),
                request_id = current_request_id().as_deref().unwrap_or(""),
                "upstream catalog fetch failed"
            );
            Err(ApiError::fetch_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{CatalogSource, FetchError};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use shopfront_api_models::Product;
    use shopfront_telemetry::Metrics;
    use std::error::Error;

    struct FixedCatalog(Vec<Product>);

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogSource for FailingCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
            Err(FetchError::Status {
                url: "http://upstream.test/products".to_string(),
                status: 502,
            })
        }
    }

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            price: 9.5,
            image: format!("https://img.test/{id}.png"),
        }
    }

    #[tokio::test]
    async fn success_returns_products_in_order() -> Result<(), Box<dyn Error>> {
        let telemetry = Metrics::new()?;
        let catalog = FixedCatalog(vec![product(2, "Lamp"), product(1, "Desk"), product(2, "Lamp")]);
        let state = Arc::new(ApiState::new(Arc::new(catalog), telemetry.clone()));

        let Json(body) = list_products(State(state))
            .await
            .map_err(|err| format!("{err:?}"))?;
        let ids: Vec<u64> = body.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
        assert_eq!(telemetry.snapshot().products_served_total, 3);
        assert_eq!(telemetry.snapshot().upstream_fetch_failures_total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn empty_upstream_is_still_success() -> Result<(), Box<dyn Error>> {
        let state = Arc::new(ApiState::new(
            Arc::new(FixedCatalog(Vec::new())),
            Metrics::new()?,
        ));
        let Json(body) = list_products(State(state))
            .await
            .map_err(|err| format!("{err:?}"))?;
        assert!(body.products.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failure_maps_to_uniform_error() -> Result<(), Box<dyn Error>> {
        let telemetry = Metrics::new()?;
        let state = Arc::new(ApiState::new(Arc::new(FailingCatalog), telemetry.clone()));

        let Err(err) = list_products(State(state)).await else {
            return Err("failing catalog must not succeed".into());
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(telemetry.snapshot().upstream_fetch_failures_total, 1);
        Ok(())
    }
}
