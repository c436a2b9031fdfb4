//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when every required one is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//!
//! ## Environment Variables
//! - `CLIENTDESK_STORE_URL`: record store base URL (required)
//! - `CLIENTDESK_PROJECT_ID`: project identifier (required)
//! - `CLIENTDESK_PUBLIC_KEY`: public API key (required)
//! - `CLIENTDESK_STORE_TIMEOUT_SECS`: request timeout in seconds
//! - `CLIENTDESK_LOG_LEVEL`: default log filter (`info` when unset)
//! - `CLIENTDESK_LOG_JSON`: emit JSON logs (true/false)
//!
//! ## File Locations
//! `config.{json,toml}` and `clientdesk.{json,toml}` are probed in the
//! working directory, its two parents, and next to the executable.

use std::path::{Path, PathBuf};

use clientdesk_domain::{ClientDeskError, Config, LoggingConfig, Result, StoreConfig};

use crate::errors::InfraError;

const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "clientdesk.json", "clientdesk.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ClientDeskError::Config` when neither the environment nor any
/// config file yields a complete configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ClientDeskError::Config` if a required variable is missing or an
/// optional one has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("CLIENTDESK_STORE_URL")?;
    let project_id = env_var("CLIENTDESK_PROJECT_ID")?;
    let public_key = env_var("CLIENTDESK_PUBLIC_KEY")?;

    let timeout_secs = std::env::var("CLIENTDESK_STORE_TIMEOUT_SECS")
        .ok()
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|e| ClientDeskError::Config(format!("Invalid store timeout: {e}")))
        })
        .transpose()?;

    let logging = LoggingConfig {
        level: std::env::var("CLIENTDESK_LOG_LEVEL")
            .unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool("CLIENTDESK_LOG_JSON", false),
    };

    Ok(Config { store: StoreConfig { base_url, project_id, public_key, timeout_secs }, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// file extension.
///
/// # Errors
/// Returns `ClientDeskError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClientDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClientDeskError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;
    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClientDeskError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ClientDeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file
///
/// Returns the first file that exists, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join("..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ClientDeskError::Config(format!("Missing required environment variable: {key}"))
        })
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
