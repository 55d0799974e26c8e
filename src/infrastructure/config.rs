//! Configuration management
//!
//! Settings come from an optional YAML file. Missing keys fall back to
//! [`Config::default`].

use crate::pipeline::Validate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "BUILDGATE_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`Config`]
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Unknown log level
    #[error("Invalid log level '{0}': expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// How resolved arguments are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Log level
    pub log_level: String,
    /// Output format for resolved arguments
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads and validates a config file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid YAML,
    /// or names an unknown log level.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the config file if one is given, otherwise the defaults
    ///
    /// # Errors
    ///
    /// See [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}

impl Validate for Config {
    type Error = ConfigError;

    fn validate(&self) -> Result<(), Self::Error> {
        if LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.log_level.clone()))
        }
    }
}
