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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (sample upstream payloads), upstream.rs (fake upstream HTTP server).

pub mod fixtures;
pub mod upstream;

pub use fixtures::{sample_upstream_payload, upstream_payload};
pub use upstream::FakeUpstream;
