//! Runtime configuration (environment, logging, storage)

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Directory for profile files; profiles stay in memory when unset
    pub data_dir: Option<PathBuf>,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl RuntimeConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        // In-memory profiles would vanish on restart
        if self.is_production() && self.data_dir.is_none() {
            return Err(ValidationError::MissingRequired("GG_MATCH__RUNTIME__DATA_DIR"));
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            data_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info,gg_matchmaker=debug".to_string()
}
