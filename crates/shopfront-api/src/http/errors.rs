//! JSON error wrapper returned by every handler.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shopfront_api_models::ErrorResponse;

/// Handler error rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Uniform failure for any upstream catalog error.
    pub(crate) fn fetch_failed() -> Self {
        let body = ErrorResponse::fetch_failed();
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body.error)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use shopfront_api_models::FETCH_FAILED_MESSAGE;
    use std::error::Error;

    #[tokio::test]
    async fn fetch_failed_renders_fixed_body() -> Result<(), Box<dyn Error>> {
        let response = ApiError::fetch_failed().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body, serde_json::json!({ "error": FETCH_FAILED_MESSAGE }));
        Ok(())
    }

    #[test]
    fn internal_keeps_status() {
        let error = ApiError::internal("failed to render metrics");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "failed to render metrics");
    }
}
