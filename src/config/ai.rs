//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration (Google Gemini)
///
/// Every field is optional. Without an API key the dialogue runs on its
/// scripted questions and keeps answers as typed.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds; must not exceed the interpreter timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Time the dialogue waits for one interpretation, in seconds
    #[serde(default = "default_interpreter_timeout")]
    pub interpreter_timeout_secs: u64,
}

impl AiConfig {
    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn interpreter_timeout(&self) -> Duration {
        Duration::from_secs(self.interpreter_timeout_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout("ai.request_timeout_secs"));
        }
        if self.interpreter_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("ai.interpreter_timeout_secs"));
        }
        // The HTTP timeout must fit within the interpreter timeout
        if self.request_timeout_secs > self.interpreter_timeout_secs {
            return Err(ValidationError::InvalidTimeout("ai.request_timeout_secs"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            interpreter_timeout_secs: default_interpreter_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_interpreter_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert!(!config.has_gemini());
        assert_eq!(config.interpreter_timeout(), Duration::from_secs(10));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = AiConfig {
            gemini_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_gemini());
    }

    #[test]
    fn test_validation_rejects_zero_timeouts() {
        let config = AiConfig {
            interpreter_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTimeout("ai.interpreter_timeout_secs"))
        );

        let config = AiConfig {
            request_timeout_secs: 301,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_request_timeout_beyond_interpreter_timeout() {
        let config = AiConfig {
            request_timeout_secs: 30,
            interpreter_timeout_secs: 10,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTimeout("ai.request_timeout_secs"))
        );

        let config = AiConfig {
            request_timeout_secs: 5,
            interpreter_timeout_secs: 10,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }
}
