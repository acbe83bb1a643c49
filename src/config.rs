// src/config.rs

//! Foodgram configuration file
//!
//! # Example foodgram.toml
//!
//! ```toml
//! [database]
//! path = "/var/lib/foodgram/foodgram.db"
//!
//! [logging]
//! # Used when RUST_LOG is not set
//! level = "info"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/foodgram/foodgram.toml";
/// Default database location
pub const DEFAULT_DB_PATH: &str = "/var/lib/foodgram/foodgram.db";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodgramConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl FoodgramConfig {
    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            return Err(Error::Config("database.path must not be empty".to_string()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Parse a configuration from a TOML string
pub fn parse_config_string(content: &str) -> Result<FoodgramConfig> {
    let config: FoodgramConfig =
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration file
pub fn parse_config_file(path: &Path) -> Result<FoodgramConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_config_string(&content)
}

/// Load the configuration
///
/// An explicit `path` must exist. Without one, the default path is read if
/// present and built-in defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<FoodgramConfig> {
    match path {
        Some(path) => parse_config_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                parse_config_file(default)
            } else {
                Ok(FoodgramConfig::default())
            }
        }
    }
}
