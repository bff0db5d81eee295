use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_CATALOG_SIZE, MIN_CATALOG_SIZE};

/// Longest simulated latency accepted from a config file.
const MAX_LATENCY_MS: u64 = 60_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `cardswap/config.toml` under `dirs::config_dir()`, or the current
    /// directory when there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cardswap").join("config.toml")
    }

    /// Loads the default config file. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates a config file. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - catalog size is within 12..=22
    /// - latency is at most one minute
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.catalog.size;
        if !(MIN_CATALOG_SIZE..=MAX_CATALOG_SIZE).contains(&size) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Catalog size {} outside {}..={}",
                    size, MIN_CATALOG_SIZE, MAX_CATALOG_SIZE
                ),
            });
        }

        if self.catalog.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Catalog latency {}ms exceeds {}ms",
                    self.catalog.latency_ms, MAX_LATENCY_MS
                ),
            });
        }

        Ok(())
    }
}
