//! HTTP API layer for ventrelay.
//!
//! Axum-based chat API at `/api/chat` consumed by the front-end chat UI,
//! with CORS support and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
