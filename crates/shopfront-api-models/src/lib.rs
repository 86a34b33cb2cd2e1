#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Shopfront catalog proxy.
//!
//! The proxy and the web UI both encode/decode these types so the wire
//! contract stays a single source of truth. The upstream projection
//! (`thumbnail` becomes `image`) lives here for the same reason.
use serde::{Deserialize, Serialize};

/// Fixed message returned to clients whenever the upstream fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products. Please try again later.";

/// Product record exposed by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, opaque product handle.
    pub id: u64,
    /// Display title; the only field searched by the list view.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Currency-agnostic price.
    pub price: f64,
    /// Thumbnail URL.
    pub image: String,
}

/// Envelope returned by `GET /products` on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductListResponse {
    /// Products in upstream order.
    pub products: Vec<Product>,
}

/// Body returned by the proxy when the upstream catalog is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// The uniform upstream failure body.
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self {
            error: FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Product record as published by the upstream catalog.
///
/// Only the fields the proxy forwards are modelled; anything else the
/// upstream sends is ignored during deserialisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpstreamProduct {
    /// Upstream product identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Product description.
    pub description: String,
    /// Product price.
    pub price: f64,
    /// Thumbnail URL, renamed to `image` on projection.
    pub thumbnail: String,
}

/// Upstream list envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpstreamProductList {
    /// Upstream products.
    pub products: Vec<UpstreamProduct>,
}

impl From<UpstreamProduct> for Product {
    fn from(value: UpstreamProduct) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            price: value.price,
            image: value.thumbnail,
        }
    }
}

impl From<UpstreamProductList> for ProductListResponse {
    fn from(value: UpstreamProductList) -> Self {
        Self {
            products: value.products.into_iter().map(Product::from).collect(),
        }
    }
}
