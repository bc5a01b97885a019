//! Session-pointer based relay over the remote conversation backend.

pub mod client;

pub use client::SessionRelayClient;
