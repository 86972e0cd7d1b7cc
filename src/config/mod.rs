//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GG_MATCH` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use gg_matchmaker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Returning {} matches per search", config.matching.result_limit);
//! ```

mod ai;
mod dialogue;
mod error;
mod matching;
mod runtime;

pub use ai::AiConfig;
pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};
pub use matching::{MatchingConfig, MAX_RESULT_LIMIT};
pub use runtime::{Environment, LogFormat, RuntimeConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// setup: scripted dialogue, in-memory storage, three matches per search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini text interpretation
    #[serde(default)]
    pub ai: AiConfig,

    /// Profile dialogue tunables
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Result size and scoring weights
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Environment, logging and storage
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GG_MATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GG_MATCH__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `GG_MATCH__MATCHING__WEIGHTS__RATING=8` -> `matching.weights.rating = 8.0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GG_MATCH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.dialogue.validate()?;
        self.matching.validate()?;
        self.runtime.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "GG_MATCH__AI__GEMINI_API_KEY",
        "GG_MATCH__DIALOGUE__SESSION_TTL_SECS",
        "GG_MATCH__MATCHING__RESULT_LIMIT",
        "GG_MATCH__MATCHING__WEIGHTS__RATING",
        "GG_MATCH__RUNTIME__ENVIRONMENT",
        "GG_MATCH__RUNTIME__LOG_FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(config.matching.result_limit, 3);
        assert_eq!(config.dialogue.session_ttl_secs, 1800);
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GG_MATCH__AI__GEMINI_API_KEY", "test-key");
        env::set_var("GG_MATCH__DIALOGUE__SESSION_TTL_SECS", "600");
        env::set_var("GG_MATCH__MATCHING__RESULT_LIMIT", "5");
        env::set_var("GG_MATCH__RUNTIME__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_gemini());
        assert_eq!(config.dialogue.session_ttl_secs, 600);
        assert_eq!(config.matching.result_limit, 5);
        assert_eq!(config.runtime.log_format, LogFormat::Json);
    }

    #[test]
    fn test_nested_weight_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GG_MATCH__MATCHING__WEIGHTS__RATING", "8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.matching.weights.rating, 8.0);
        assert_eq!(config.matching.weights.primary_game, 10.0);
    }

    #[test]
    fn test_production_without_data_dir_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GG_MATCH__RUNTIME__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }
}
