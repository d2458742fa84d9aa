use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `[api].base_url`
pub const API_URL_ENV: &str = "TASKBOARD_API";

/// Configuration from taskboard.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the tracker API, e.g. "https://tracker.example.com/api"
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Validation rules that depend on deployment (see `ops::task_ops::validate_draft`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Reject drafts whose deadline is in the past. Only meaningful for
    /// deployments where tasks still carry a deadline field.
    #[serde(default)]
    pub require_future_deadline: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api: ApiConfig {
                base_url: "http://localhost:5000".into(),
                timeout_secs: default_timeout_secs(),
            },
            rules: RuleConfig::default(),
        }
    }
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ClientConfig {
    /// Read taskboard.toml from `dir`. A missing file yields the defaults;
    /// the `TASKBOARD_API` env var overrides the base URL either way.
    pub fn load(dir: &Path) -> Result<ClientConfig, ConfigError> {
        let path = dir.join("taskboard.toml");
        let mut config = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            })?;
            toml::from_str(&text)?
        } else {
            ClientConfig::default()
        };
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api.base_url = url;
        }
        Ok(config)
    }
}
