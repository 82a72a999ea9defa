//! Configuration module
//!
//! TOML file at ~/.config/staffhub/config.toml by default; every
//! section and field is optional and falls back to its default.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, overridable via RUST_LOG.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Where the persisted session lives. Defaults next to the config.
    #[serde(default)]
    pub slot_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl SessionConfig {
    pub fn resolved_slot_path(&self) -> PathBuf {
        self.slot_path
            .clone()
            .unwrap_or_else(default_session_slot_path)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn config_root() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("staffhub")
}

pub fn default_config_path() -> PathBuf {
    config_root().join("config.toml")
}

pub fn default_session_slot_path() -> PathBuf {
    config_root().join("session.json")
}
