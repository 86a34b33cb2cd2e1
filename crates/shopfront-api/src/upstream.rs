//! Upstream catalog access.
//!
//! # Design
//! - `CatalogSource` is the seam between HTTP handlers and the third-party API so
//!   handlers can be exercised with in-memory fakes.
//! - `UpstreamCatalog` owns one `reqwest::Client` built at startup; every call
//!   performs exactly one outbound request with no retry.
//! - `FetchError` records which stage failed for diagnostics only; callers treat
//!   every variant the same way.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shopfront_api_models::{Product, UpstreamProductList};

/// Shared handle to a catalog source.
pub type SharedCatalog = Arc<dyn CatalogSource>;

/// Source of the full product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product in upstream order.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the upstream is unreachable, answers with a
    /// non-success status, or returns a body that cannot be decoded.
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Failure while fetching the upstream catalog.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    Transport {
        /// Upstream endpoint.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The upstream answered with a non-success status.
    Status {
        /// Upstream endpoint.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// The body was not the expected JSON shape.
    Decode {
        /// Upstream endpoint.
        url: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short label for the stage that failed.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
        }
    }

    /// Upstream endpoint involved in the failure.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { .. } => formatter.write_str("upstream request failed"),
            Self::Status { .. } => formatter.write_str("upstream returned an error status"),
            Self::Decode { .. } => formatter.write_str("upstream body could not be decoded"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// `reqwest`-backed catalog source.
#[derive(Clone, Debug)]
pub struct UpstreamCatalog {
    client: reqwest::Client,
    url: String,
}

impl UpstreamCatalog {
    /// Build the HTTP client once for the lifetime of the process.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    /// Endpoint queried by this source.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for UpstreamCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;
        let list: UpstreamProductList =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: self.url.clone(),
                source,
            })?;

        Ok(list.products.into_iter().map(Product::from).collect())
    }
}
