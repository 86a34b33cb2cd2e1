//! Core, DOM-free primitives for the Web UI.
pub mod store;
