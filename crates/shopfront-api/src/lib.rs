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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Catalog proxy HTTP surface.
//!
//! Layout: `upstream.rs` (`CatalogSource` + reqwest client), `state.rs` (shared handler state),
//! `http/` (router, handlers, error mapping, metrics middleware), `error.rs` (server errors).

pub mod error;
pub mod http;
mod state;
pub mod upstream;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::{ApiServer, ServerOptions};
pub use upstream::{CatalogSource, FetchError, SharedCatalog, UpstreamCatalog};
