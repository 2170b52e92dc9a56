//! Runtime configuration for the food services.

use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

fn default_buffer() -> usize {
    32
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0} must be greater than zero")]
    ZeroBuffer(&'static str),
}

/// Settings for [`FoodSystem`](crate::lifecycle::FoodSystem).
///
/// Every key is optional:
///
/// ```toml
/// order_buffer = 64
/// schedule_buffer = 16
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Capacity of the order store's request channel.
    #[serde(default = "default_buffer")]
    pub order_buffer: usize,
    /// Capacity of the schedule store's request channel.
    #[serde(default = "default_buffer")]
    pub schedule_buffer: usize,
    /// Default tracing directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            order_buffer: default_buffer(),
            schedule_buffer: default_buffer(),
            log_level: default_log_level(),
        }
    }
}

impl SystemConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero channel capacities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_buffer == 0 {
            return Err(ConfigError::ZeroBuffer("order_buffer"));
        }
        if self.schedule_buffer == 0 {
            return Err(ConfigError::ZeroBuffer("schedule_buffer"));
        }
        Ok(())
    }
}
