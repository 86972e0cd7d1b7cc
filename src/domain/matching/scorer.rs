//! Compatibility Scorer - multi-factor score of a candidate against a viewer.
//!
//! # Algorithm
//!
//! Factors are evaluated in a fixed order and their weights are added:
//!
//! 1. Primary game (hard gate: excluded unless both games are stated and equal)
//! 2. Skill level (ordinal distance)
//! 3. Play style (equality)
//! 4. Availability (token overlap)
//! 5. Gender (equality, partial credit when an answer is kept private)
//! 6. Communication style (ordinal distance)
//! 7. Rating boost (mean stars received)
//!
//! Every factor that contributes appends one reason, in that order.
//! Scoring is pure and total: it never fails, it only includes or excludes.

use std::collections::HashMap;

use super::availability::availability_overlaps;
use super::weights::{ScoringWeights, NEAR_RANK_FACTOR, PRIVATE_GENDER_FACTOR};
use crate::domain::foundation::UserId;
use crate::domain::profile::lexicon::{is_unspecified_marker, normalize, PRIVATE_MARKER};
use crate::domain::profile::{CommunicationStyle, Ordinal, PlayerProfile, ProfileField, SkillLevel};

/// Mean rating a candidate has received, already filtered for the viewer's game.
pub trait RatingLookup {
    fn mean_rating(&self, candidate: &UserId) -> Option<f64>;
}

/// Lookup used when no rating history is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRatings;

impl RatingLookup for NoRatings {
    fn mean_rating(&self, _candidate: &UserId) -> Option<f64> {
        None
    }
}

impl RatingLookup for HashMap<UserId, f64> {
    fn mean_rating(&self, candidate: &UserId) -> Option<f64> {
        self.get(candidate).copied()
    }
}

/// Positive score with the reasons that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Compatibility {
    /// Total, rounded to one decimal place.
    pub score: f64,
    pub reasons: Vec<String>,
}

/// How a gender answer takes part in scoring.
#[derive(Debug, PartialEq, Eq)]
enum GenderAnswer {
    Absent,
    Unspecified,
    Private,
    Stated(String),
}

impl GenderAnswer {
    fn classify(raw: &str) -> Self {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            Self::Absent
        } else if is_unspecified_marker(&normalized) {
            Self::Unspecified
        } else if normalized == PRIVATE_MARKER {
            Self::Private
        } else {
            Self::Stated(normalized)
        }
    }
}

/// Pure compatibility scorer.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// The shared primary game (normalized) when the candidate passes the gate.
    ///
    /// Both games must be stated: empty or "unspecified" games never match,
    /// not even each other.
    pub fn shared_primary_game(viewer: &PlayerProfile, candidate: &PlayerProfile) -> Option<String> {
        let viewer_game = normalize(viewer.text(ProfileField::PrimaryGame));
        let candidate_game = normalize(candidate.text(ProfileField::PrimaryGame));

        let stated = |game: &str| !game.is_empty() && !is_unspecified_marker(game);
        if stated(&viewer_game) && stated(&candidate_game) && viewer_game == candidate_game {
            Some(candidate_game)
        } else {
            None
        }
    }

    /// Scores `candidate` for `viewer`. `None` means the candidate is excluded.
    pub fn score(
        &self,
        viewer: &PlayerProfile,
        candidate: &PlayerProfile,
        ratings: &dyn RatingLookup,
    ) -> Option<Compatibility> {
        Self::shared_primary_game(viewer, candidate)?;

        let w = &self.weights;
        let mut total = w.primary_game;
        let mut reasons = vec![format!(
            "Mesmo jogo ({})",
            candidate.text(ProfileField::PrimaryGame).trim()
        )];

        let skill = Self::ordinal_score(
            SkillLevel::from_label(viewer.text(ProfileField::SkillLevel)),
            SkillLevel::from_label(candidate.text(ProfileField::SkillLevel)),
            w.skill_level,
        );
        if skill > 0.0 {
            total += skill;
            reasons.push("Nível compatível".to_string());
        }

        if Self::same_stated_answer(
            viewer.text(ProfileField::PlayStyle),
            candidate.text(ProfileField::PlayStyle),
        ) && w.play_style > 0.0
        {
            total += w.play_style;
            reasons.push("Mesmo estilo".to_string());
        }

        if availability_overlaps(
            viewer.text(ProfileField::Availability),
            candidate.text(ProfileField::Availability),
        ) && w.availability > 0.0
        {
            total += w.availability;
            reasons.push("Disponibilidade similar".to_string());
        }

        let gender = self.gender_score(
            viewer.text(ProfileField::Gender),
            candidate.text(ProfileField::Gender),
        );
        if gender > 0.0 {
            total += gender;
            reasons.push("Gênero".to_string());
        }

        let communication = Self::ordinal_score(
            CommunicationStyle::from_label(viewer.text(ProfileField::CommunicationStyle)),
            CommunicationStyle::from_label(candidate.text(ProfileField::CommunicationStyle)),
            w.communication_style,
        );
        if communication > 0.0 {
            total += communication;
            reasons.push("Comunicação compatível".to_string());
        }

        if let Some(mean) = ratings
            .mean_rating(&candidate.user_id)
            .filter(|mean| mean.is_finite() && *mean > 0.0)
        {
            let boost = (mean / 5.0) * w.rating;
            if boost > 0.0 {
                total += boost;
                reasons.push(format!("Bem avaliado (⭐{:.1}, +{:.1})", mean, boost));
            }
        }

        let score = round_one_decimal(total);
        if score <= 0.0 {
            return None;
        }

        Some(Compatibility { score, reasons })
    }

    /// Full weight at equal ranks, a share of it one step apart, nothing otherwise.
    pub fn ordinal_score<T: Ordinal>(a: T, b: T, weight: f64) -> f64 {
        match (a.rank(), b.rank()) {
            (Some(a), Some(b)) => match a.abs_diff(b) {
                0 => weight,
                1 => weight * NEAR_RANK_FACTOR,
                _ => 0.0,
            },
            _ => 0.0,
        }
    }

    fn same_stated_answer(a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        !a.is_empty() && !is_unspecified_marker(&a) && a == b
    }

    fn gender_score(&self, viewer: &str, candidate: &str) -> f64 {
        use GenderAnswer::*;

        // Two unspecified answers add nothing
        match (GenderAnswer::classify(viewer), GenderAnswer::classify(candidate)) {
            (Unspecified, Unspecified) => 0.0,
            (Unspecified | Private, _) | (_, Unspecified | Private) => {
                self.weights.gender * PRIVATE_GENDER_FACTOR
            }
            (Stated(a), Stated(b)) if a == b => self.weights.gender,
            _ => 0.0,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
