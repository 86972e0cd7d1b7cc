//! Ranked match suggestion.

use serde::{Deserialize, Serialize};

use super::scorer::Compatibility;
use crate::domain::foundation::UserId;
use crate::domain::profile::{PlayerProfile, ProfileField};

/// Display name used when a candidate never stated one.
pub const DEFAULT_CANDIDATE_NAME: &str = "Jogador";

/// Rationale shown when a positive score carries no reason.
pub const DEFAULT_RATIONALE: &str = "Compatibilidade!";

/// A candidate that passed scoring, with what the viewer should see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub user_id: UserId,
    pub display_name: String,
    pub game: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub rationale: String,
    /// Upper-cased first letter of the display name, `?` when there is none.
    pub initial: String,
}

impl ScoredCandidate {
    pub fn from_compatibility(candidate: &PlayerProfile, compatibility: Compatibility) -> Self {
        let display_name = candidate
            .stated_display_name()
            .unwrap_or(DEFAULT_CANDIDATE_NAME)
            .to_string();

        let rationale = if compatibility.reasons.is_empty() {
            DEFAULT_RATIONALE.to_string()
        } else {
            compatibility.reasons.join(", ")
        };

        Self {
            user_id: candidate.user_id.clone(),
            initial: initial_of(&display_name),
            display_name,
            game: candidate.text(ProfileField::PrimaryGame).to_string(),
            score: compatibility.score,
            reasons: compatibility.reasons,
            rationale,
        }
    }
}

fn initial_of(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compat(reasons: &[&str]) -> Compatibility {
        Compatibility {
            score: 12.0,
            reasons: reasons.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn rationale_joins_reasons() {
        let profile = PlayerProfile::new(UserId::new("c").unwrap())
            .with_field(ProfileField::DisplayName, "lulu")
            .with_field(ProfileField::PrimaryGame, "Valorant");

        let scored = ScoredCandidate::from_compatibility(
            &profile,
            compat(&["Mesmo jogo (Valorant)", "Mesmo estilo"]),
        );

        assert_eq!(scored.rationale, "Mesmo jogo (Valorant), Mesmo estilo");
        assert_eq!(scored.display_name, "lulu");
        assert_eq!(scored.initial, "L");
        assert_eq!(scored.game, "Valorant");
    }

    #[test]
    fn missing_name_and_reasons_use_defaults() {
        let profile = PlayerProfile::new(UserId::new("c").unwrap());

        let scored = ScoredCandidate::from_compatibility(&profile, compat(&[]));

        assert_eq!(scored.display_name, DEFAULT_CANDIDATE_NAME);
        assert_eq!(scored.rationale, DEFAULT_RATIONALE);
        assert_eq!(scored.initial, "J");
    }

    #[test]
    fn initial_of_blank_is_question_mark() {
        assert_eq!(initial_of("  "), "?");
        assert_eq!(initial_of("élan"), "É");
    }
}
