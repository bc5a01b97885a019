//! Infrastructure layer for ventrelay.
//!
//! Contains the implementation of the `RemoteConversationService` port
//! defined in `ventrelay-core` (a JSON-over-HTTP transport built on reqwest)
//! and the configuration loader.

pub mod config;
pub mod remote;
