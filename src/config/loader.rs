//! Load client settings from the environment and service definitions from JSON.

use crate::config::types::{ClientConfig, ServicesConfig};
use crate::config::validate;
use crate::error::ConfigError;
use std::path::Path;

pub const ENV_BASE_URL: &str = "ENDPOINT_SDK_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ENDPOINT_SDK_TIMEOUT_SECS";
pub const ENV_URL_PREFIX: &str = "ENDPOINT_SDK_URL_PREFIX";

impl ClientConfig {
    /// Reads `.env` (if any) and then the `ENDPOINT_SDK_*` variables. Unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|s| !s.is_empty()) {
            config.base_url = Some(url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Env {
                name: ENV_TIMEOUT_SECS,
                message: e.to_string(),
            })?;
            config.timeout_secs = Some(secs);
        }
        if let Some(prefix) = lookup(ENV_URL_PREFIX) {
            config.url_prefix = prefix;
        }
        Ok(config)
    }
}

/// Parse and validate a services definition.
pub fn load_services_from_str(json: &str) -> Result<ServicesConfig, ConfigError> {
    let config: ServicesConfig = serde_json::from_str(json)?;
    validate(&config)?;
    Ok(config)
}

pub async fn load_services_from_path(path: impl AsRef<Path>) -> Result<ServicesConfig, ConfigError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loading services");
    load_services_from_str(&json)
}
