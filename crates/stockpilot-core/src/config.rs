//! Application configuration management.
//!
//! Two layers:
//! - `ClientConfig`: API base address, request timeout and build mode, read
//!   from the environment once at process start
//! - `Settings`: user preferences persisted at
//!   `~/.config/stockpilot/config.json`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::routes::BuildMode;

/// Application name used for config/cache directory paths
pub const APP_NAME: &str = "stockpilot";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// API base address used when the environment does not override it
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the API base address
pub const API_BASE_URL_ENV: &str = "STOCKPILOT_API_BASE_URL";

/// Environment variable switching the route guard off
pub const DEV_MODE_ENV: &str = "STOCKPILOT_DEV_MODE";

/// Environment variable choosing where the session token is kept
pub const TOKEN_STORE_ENV: &str = "STOCKPILOT_TOKEN_STORE";

/// Where the session token is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenBackend {
    /// `session.json` in the cache directory
    #[default]
    File,
    /// OS keychain
    Keychain,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Invalid value {0:?} for STOCKPILOT_DEV_MODE (expected 1/0, true/false, yes/no)")]
    InvalidDevMode(String),

    #[error("Invalid value {0:?} for STOCKPILOT_TOKEN_STORE (expected file or keychain)")]
    InvalidTokenStore(String),
}

/// Settings the API client and router are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub build_mode: BuildMode,
    pub token_backend: TokenBackend,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            build_mode: BuildMode::Production,
            token_backend: TokenBackend::File,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another API base address.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: validate_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = validate_base_url(base.trim())?;
        }

        if let Some(raw) = lookup(DEV_MODE_ENV) {
            if parse_flag(&raw)? {
                warn!(
                    "{} is set: route access checks are disabled for this process",
                    DEV_MODE_ENV
                );
                config.build_mode = BuildMode::Development;
            }
        }

        if let Some(raw) = lookup(TOKEN_STORE_ENV) {
            config.token_backend = match raw.trim().to_ascii_lowercase().as_str() {
                "" | "file" => TokenBackend::File,
                "keychain" => TokenBackend::Keychain,
                _ => return Err(ConfigError::InvalidTokenStore(raw)),
            };
        }

        Ok(config)
    }
}

fn validate_base_url(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }
    Ok(value.trim_end_matches('/').to_string())
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidDevMode(raw.to_string())),
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    pub last_user_id: Option<String>,
    #[serde(default)]
    pub auto_login: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding the session file and logs
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
