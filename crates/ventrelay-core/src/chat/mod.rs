//! Chat request handling for the UI-facing endpoints.
//!
//! `ChatRequestHandler` adapts the "post a message" and "load history"
//! operations to a per-request `SessionRelayClient` and shapes the results
//! into the UI's message list.

pub mod handler;

pub use handler::ChatRequestHandler;
