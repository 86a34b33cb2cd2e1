//! Product catalog feature: list manager, pure helpers, timers, and proxy access.
//!
//! # Design
//! - Keep every state transition in `state.rs` so it is testable without a browser.
//! - Restrict HTTP calls to `api.rs`.

pub mod api;
pub mod logic;
pub mod state;
pub mod timers;
