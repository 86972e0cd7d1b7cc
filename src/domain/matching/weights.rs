//! Scoring weights for the compatibility scorer.

use serde::{Deserialize, Serialize};

/// Share of a factor's weight awarded when two ordinal ranks are one step apart.
pub const NEAR_RANK_FACTOR: f64 = 0.6;

/// Share of the gender weight awarded when a player keeps that answer private.
pub const PRIVATE_GENDER_FACTOR: f64 = 0.2;

/// Additive weight of each compatibility factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub primary_game: f64,
    pub skill_level: f64,
    pub play_style: f64,
    pub availability: f64,
    pub gender: f64,
    pub communication_style: f64,
    /// Maximum boost, reached by a 5-star mean rating.
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary_game: 10.0,
            skill_level: 3.0,
            play_style: 3.0,
            availability: 2.0,
            gender: 1.0,
            communication_style: 2.0,
            rating: 4.0,
        }
    }
}

impl ScoringWeights {
    /// True when no weight is negative or non-finite.
    pub fn is_valid(&self) -> bool {
        [
            self.primary_game,
            self.skill_level,
            self.play_style,
            self.availability,
            self.gender,
            self.communication_style,
            self.rating,
        ]
        .iter()
        .all(|w| w.is_finite() && *w >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_the_primary_game() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.primary_game, 10.0);
        assert_eq!(weights.rating, 4.0);
        assert!(weights.is_valid());
    }

    #[test]
    fn negative_weight_is_invalid() {
        let weights = ScoringWeights {
            gender: -1.0,
            ..Default::default()
        };
        assert!(!weights.is_valid());
    }

    #[test]
    fn partial_deserialization_keeps_defaults() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"rating": 8.0}"#).unwrap();
        assert_eq!(weights.rating, 8.0);
        assert_eq!(weights.skill_level, 3.0);
    }
}
