//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid AI base URL (must start with http:// or https://)")]
    InvalidBaseUrl,

    #[error("Session TTL must be positive")]
    InvalidSessionTtl,

    #[error("Maximum answer length must be positive")]
    InvalidAnswerLength,

    #[error("Result limit must be between 1 and {0}")]
    InvalidResultLimit(usize),

    #[error("Scoring weights must be finite and non-negative")]
    InvalidWeights,

    #[error("Log level cannot be empty")]
    EmptyLogLevel,
}
