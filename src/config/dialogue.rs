//! Profile dialogue configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DialogueConfig {
    /// Idle seconds before an unfinished dialogue is dropped
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Longest interpreted answer kept, in characters
    #[serde(default = "default_max_extracted_len")]
    pub max_extracted_len: usize,
}

impl DialogueConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.max_extracted_len == 0 {
            return Err(ValidationError::InvalidAnswerLength);
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            max_extracted_len: default_max_extracted_len(),
        }
    }
}

fn default_session_ttl() -> u64 {
    1800
}

fn default_max_extracted_len() -> usize {
    100
}
