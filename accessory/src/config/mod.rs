//! Accessory configuration as supplied by the host at registration time.

pub mod validation;

use std::path::Path;

use octoprint_client::DEFAULT_SERVER;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Immutable accessory configuration.
///
/// Absent `allow_pause`/`allow_cancel` keys mean the feature is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessoryConfig {
    /// Accessory type tag used by the host to route the block; not interpreted.
    #[serde(default)]
    pub accessory: Option<String>,
    pub name: String,
    #[serde(rename = "server", default = "default_server")]
    pub server_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub allow_pause: bool,
    #[serde(default)]
    pub allow_cancel: bool,
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

impl AccessoryConfig {
    /// Parse and validate a config object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.normalized()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.normalized()
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        let server = self.server_url.trim().trim_end_matches('/');
        self.server_url = if server.is_empty() {
            default_server()
        } else {
            server.to_string()
        };

        validation::validate_name(&self.name)
            .map_err(|reason| ConfigError::Invalid { field: "name", reason })?;
        validation::validate_server(&self.server_url)
            .map_err(|reason| ConfigError::Invalid { field: "server", reason })?;

        if self.api_key.is_empty() {
            tracing::warn!(name = %self.name, "No api_key configured; OctoPrint will reject requests");
        }
        Ok(self)
    }
}
