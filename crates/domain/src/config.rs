//! Configuration structures
//!
//! Loading lives in `clientdesk-infra::config`; these types only describe the
//! shape of the configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the hosted record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the record store API (no trailing slash required)
    pub base_url: String,
    /// Project identifier sent with every request
    pub project_id: String,
    /// Public API key sent as a bearer token
    pub public_key: String,
    /// Optional per-request timeout; no timeout is applied when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Request timeout as a [`Duration`], if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            project_id: String::new(),
            public_key: String::new(),
            timeout_secs: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
