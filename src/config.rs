//! Runtime configuration.
//!
//! Values come from an optional YAML file and are then overridden by
//! environment variables:
//!
//! | key                    | env var                        | default                                   |
//! |------------------------|--------------------------------|-------------------------------------------|
//! | `base_url`             | `MEALDB_BASE_URL`              | `https://www.themealdb.com/api/json/v1/1` |
//! | `timeout_secs`         | `MEALDB_TIMEOUT_SECS`          | `30`                                      |
//! | `connect_timeout_secs` | `MEALDB_CONNECT_TIMEOUT_SECS`  | `10`                                      |

use crate::source::DEFAULT_BASE_URL;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the recipe API, without a trailing endpoint
    pub base_url: String,
    /// Whole-request timeout
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads the config file (if any), then applies process environment overrides.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Config::default(),
        };
        config.with_overrides(&std::env::vars().collect())
    }

    /// Parses a YAML config file. Missing keys keep their defaults.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies `MEALDB_*` overrides from `vars`.
    pub fn with_overrides(mut self, vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        if let Some(base_url) = vars.get("MEALDB_BASE_URL") {
            info!("MEALDB_BASE_URL set, using {base_url}");
            self.base_url = base_url.clone();
        }
        if let Some(value) = parse_var(vars, "MEALDB_TIMEOUT_SECS")? {
            self.timeout_secs = value;
        }
        if let Some(value) = parse_var(vars, "MEALDB_CONNECT_TIMEOUT_SECS")? {
            self.connect_timeout_secs = value;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: format!("expected an http(s) URL, got {:?}", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "connect_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    let Some(raw) = vars.get(key) else {
        return Ok(None);
    };
    raw.trim().parse::<T>().map(Some).map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }
    })
}
