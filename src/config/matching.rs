//! Matching configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matching::ScoringWeights;

/// Largest result list a player can ask for.
pub const MAX_RESULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Matches returned per search
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Per-factor scoring weights
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.result_limit == 0 || self.result_limit > MAX_RESULT_LIMIT {
            return Err(ValidationError::InvalidResultLimit(MAX_RESULT_LIMIT));
        }
        if !self.weights.is_valid() {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            weights: ScoringWeights::default(),
        }
    }
}

fn default_result_limit() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_defaults() {
        let config = MatchingConfig::default();
        assert_eq!(config.result_limit, 3);
        assert_eq!(config.weights, ScoringWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_result_limit_bounds() {
        for limit in [0, MAX_RESULT_LIMIT + 1] {
            let config = MatchingConfig {
                result_limit: limit,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let config = MatchingConfig {
            weights: ScoringWeights {
                rating: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWeights));
    }
}
