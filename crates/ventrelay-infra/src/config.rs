//! Configuration loader for ventrelay.
//!
//! Reads `ventrelay.toml` (or an explicit path) and deserializes it into
//! [`RelayConfig`]. Falls back to defaults when the file is missing or
//! malformed, then applies environment overrides.

use std::path::Path;

use ventrelay_types::config::RelayConfig;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ventrelay.toml";

/// Environment variable overriding `backend.canister_id`.
pub const ENV_CANISTER_ID: &str = "VENTRELAY_CANISTER_ID";

/// Environment variable overriding `backend.host`.
pub const ENV_HOST: &str = "VENTRELAY_HOST";

/// Environment variable overriding `server.bind`.
pub const ENV_BIND: &str = "VENTRELAY_BIND";

/// Load configuration from `path`, then apply process environment overrides.
///
/// - If the file does not exist, starts from [`RelayConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and starts from the default.
pub async fn load_config(path: &Path) -> RelayConfig {
    let mut config = load_config_file(path).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

/// Load configuration from `path` without looking at the environment.
pub async fn load_config_file(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

/// Overwrite config values with non-empty environment values.
///
/// `lookup` abstracts `std::env::var` so callers (and tests) can supply
/// their own source.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(canister_id) = get(ENV_CANISTER_ID) {
        config.backend.canister_id = canister_id;
    }
    if let Some(host) = get(ENV_HOST) {
        config.backend.host = host;
    }
    if let Some(bind) = get(ENV_BIND) {
        config.server.bind = bind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use ventrelay_types::config::{DEFAULT_CANISTER_ID, DEFAULT_HOST};

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_file(&tmp.path().join("ventrelay.toml")).await;
        assert_eq!(config, RelayConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("ventrelay.toml");
        tokio::fs::write(
            &config_path,
            r#"
[backend]
canister_id = "be2us-64aaa-aaaaa-qaabq-cai"
host = "http://127.0.0.1:4943"

[server]
bind = "0.0.0.0:8080"
"#,
        )
        .await
        .unwrap();

        let config = load_config_file(&config_path).await;
        assert_eq!(config.backend.canister_id, "be2us-64aaa-aaaaa-qaabq-cai");
        assert_eq!(config.backend.host, "http://127.0.0.1:4943");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("ventrelay.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config_file(&config_path).await;
        assert_eq!(config.backend.canister_id, DEFAULT_CANISTER_ID);
        assert_eq!(config.backend.host, DEFAULT_HOST);
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_CANISTER_ID, "aaaaa-aa"),
            (ENV_HOST, "http://localhost:4943"),
            (ENV_BIND, "0.0.0.0:9000"),
        ]);
        let mut config = RelayConfig::default();

        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.canister_id, "aaaaa-aa");
        assert_eq!(config.backend.host, "http://localhost:4943");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = RelayConfig::default();

        apply_env_overrides(&mut config, |key| {
            (key == ENV_HOST).then(String::new)
        });

        assert_eq!(config.backend.host, DEFAULT_HOST);
    }
}
