//! Session relay logic for ventrelay.
//!
//! This crate defines the "port" to the remote conversation backend
//! (`RemoteConversationService`) that the infrastructure layer implements,
//! the session relay client built on top of it, and the chat request
//! handler the HTTP layer calls. It depends only on `ventrelay-types` --
//! never on `ventrelay-infra` or any network crate.

pub mod chat;
pub mod relay;
pub mod remote;

#[cfg(test)]
pub(crate) mod testing;
