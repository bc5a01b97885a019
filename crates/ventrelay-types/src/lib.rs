//! Shared domain types for ventrelay.
//!
//! This crate contains the types shared by every layer of the relay:
//! sessions and messages as the remote backend returns them, the tagged
//! result shape of mutating backend calls, the chat UI payloads, the
//! configuration model, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod remote;
pub mod session;
