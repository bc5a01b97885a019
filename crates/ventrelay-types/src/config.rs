//! Configuration types for ventrelay.
//!
//! `RelayConfig` represents `ventrelay.toml`: where the remote conversation
//! backend lives and where the HTTP server binds. All fields have defaults,
//! so an empty file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};

/// Canister id used when none is configured.
pub const DEFAULT_CANISTER_ID: &str = "rrkah-fqaaa-aaaaa-aaaaq-cai";

/// Backend host used when none is configured.
pub const DEFAULT_HOST: &str = "https://ic0.app";

/// Server bind address used when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Location of the remote conversation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Identifier of the backend endpoint (canister) on the host.
    #[serde(default = "default_canister_id")]
    pub canister_id: String,

    /// Base URL of the host serving the backend.
    #[serde(default = "default_host")]
    pub host: String,

    /// Per-request transport timeout. Unset means the request may wait
    /// indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_canister_id() -> String {
    DEFAULT_CANISTER_ID.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            canister_id: default_canister_id(),
            host: default_host(),
            request_timeout_secs: None,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}
