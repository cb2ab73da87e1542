//! HTTP server adapters
//!
//! Translate between an HTTP framework and the HTTP-agnostic [`crate::api`]
//! layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight single-threaded server for the local board UI

#[cfg(feature = "ui")]
pub mod tiny_http;
