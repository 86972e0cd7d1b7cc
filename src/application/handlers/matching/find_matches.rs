//! FindMatches query handler.

use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::dialogue::DEFAULT_PLAYER_NAME;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::matching::{CompatibilityScorer, MatchRanker, RankOutcome};
use crate::domain::profile::PlayerProfile;
use crate::ports::{ProfileRepository, RatingRepository};

pub const MATCHES_FOUND_MESSAGE: &str = "Matches encontrados!";
pub const NO_OTHER_PLAYERS_MESSAGE: &str = "END_OF_MATCHES: Não há outros jogadores.";

/// Query for the best matches of one player.
#[derive(Debug, Clone)]
pub struct FindMatchesQuery {
    pub user_id: UserId,
}

/// Ranked outcome plus the line shown to the player.
#[derive(Debug, Clone)]
pub struct FindMatchesResult {
    pub outcome: RankOutcome,
    pub message: String,
}

/// Errors that can occur when searching for matches.
#[derive(Debug, Clone, Error)]
pub enum FindMatchesError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(UserId),

    #[error("Profile incomplete: {0}")]
    ProfileIncomplete(UserId),

    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<DomainError> for FindMatchesError {
    fn from(err: DomainError) -> Self {
        FindMatchesError::Domain(err.to_string())
    }
}

/// Handler for match searches.
pub struct FindMatchesHandler {
    profiles: Arc<dyn ProfileRepository>,
    ratings: Arc<dyn RatingRepository>,
    ranker: MatchRanker,
}

impl FindMatchesHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        ratings: Arc<dyn RatingRepository>,
        ranker: MatchRanker,
    ) -> Self {
        Self {
            profiles,
            ratings,
            ranker,
        }
    }

    pub async fn handle(&self, query: FindMatchesQuery) -> Result<FindMatchesResult, FindMatchesError> {
        let viewer = self
            .profiles
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| FindMatchesError::ProfileNotFound(query.user_id.clone()))?;

        if !viewer.complete {
            return Err(FindMatchesError::ProfileIncomplete(query.user_id));
        }

        let candidates = self.profiles.list_others(&viewer.user_id, true).await?;
        let ratings = self.fetch_ratings(&viewer, &candidates).await;
        let outcome = self.ranker.rank(&viewer, &candidates, &ratings);

        let message = match &outcome {
            RankOutcome::Matches(_) => MATCHES_FOUND_MESSAGE.to_string(),
            RankOutcome::NoCandidates => NO_OTHER_PLAYERS_MESSAGE.to_string(),
            RankOutcome::NoCompatibleMatch => format!(
                "END_OF_MATCHES: Nenhum match para {}.",
                viewer.stated_display_name().unwrap_or(DEFAULT_PLAYER_NAME)
            ),
        };

        tracing::info!(
            user_id = %viewer.user_id,
            candidates = candidates.len(),
            matches = outcome.matches().len(),
            "Match search finished"
        );

        Ok(FindMatchesResult { outcome, message })
    }

    /// Mean ratings of the candidates sharing the viewer's game, for that game.
    ///
    /// A failed lookup only costs that candidate the rating boost.
    async fn fetch_ratings(
        &self,
        viewer: &PlayerProfile,
        candidates: &[PlayerProfile],
    ) -> HashMap<UserId, f64> {
        let lookups = candidates.iter().filter_map(|candidate| {
            let game = CompatibilityScorer::shared_primary_game(viewer, candidate)?;
            Some(async move {
                let mean = self.ratings.mean_rating(&candidate.user_id, Some(game.as_str())).await;
                (&candidate.user_id, mean)
            })
        });

        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(user_id, mean)| match mean {
                Ok(mean) => mean.map(|m| (user_id.clone(), m)),
                Err(err) => {
                    tracing::warn!(candidate = %user_id, error = %err, "Rating lookup failed");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryRatingRepository};
    use crate::domain::foundation::{ErrorCode, StarRating, Timestamp};
    use crate::domain::profile::ProfileField;
    use crate::domain::social::PlayerRating;
    use async_trait::async_trait;
    use crate::ports::RatingUpsert;

    fn id(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn player(user: &str, name: &str, game: &str, skill: &str) -> PlayerProfile {
        PlayerProfile::new(id(user))
            .with_field(ProfileField::DisplayName, name)
            .with_field(ProfileField::PrimaryGame, game)
            .with_field(ProfileField::SkillLevel, skill)
            .with_field(ProfileField::PlayStyle, "Competitivo")
            .with_field(ProfileField::Availability, "Noites")
            .with_field(ProfileField::Gender, "Mulher")
            .with_field(ProfileField::CommunicationStyle, "Conversa casual e social")
            .completed()
    }

    fn handler(profiles: Vec<PlayerProfile>, ratings: Arc<dyn RatingRepository>) -> FindMatchesHandler {
        FindMatchesHandler::new(
            Arc::new(InMemoryProfileRepository::with_profiles(profiles)),
            ratings,
            MatchRanker::default(),
        )
    }

    fn query(user: &str) -> FindMatchesQuery {
        FindMatchesQuery { user_id: id(user) }
    }

    struct FailingRatings;

    #[async_trait]
    impl RatingRepository for FailingRatings {
        async fn upsert(&self, _rating: &PlayerRating) -> Result<RatingUpsert, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "down"))
        }

        async fn mean_rating(
            &self,
            _user: &UserId,
            _game: Option<&str>,
        ) -> Result<Option<f64>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "down"))
        }
    }

    #[tokio::test]
    async fn missing_viewer_profile_is_not_found() {
        let h = handler(vec![], Arc::new(InMemoryRatingRepository::new()));

        let result = h.handle(query("me")).await;

        assert!(matches!(result, Err(FindMatchesError::ProfileNotFound(_))));
    }

    #[tokio::test]
    async fn incomplete_viewer_profile_is_rejected() {
        let draft = PlayerProfile::new(id("me")).with_field(ProfileField::PrimaryGame, "Valorant");
        let h = handler(vec![draft], Arc::new(InMemoryRatingRepository::new()));

        let result = h.handle(query("me")).await;

        assert!(matches!(result, Err(FindMatchesError::ProfileIncomplete(_))));
    }

    #[tokio::test]
    async fn alone_in_the_pool_reports_no_other_players() {
        let h = handler(
            vec![player("me", "Lulu", "Valorant", "Avançado")],
            Arc::new(InMemoryRatingRepository::new()),
        );

        let result = h.handle(query("me")).await.unwrap();

        assert_eq!(result.outcome, RankOutcome::NoCandidates);
        assert_eq!(result.message, NO_OTHER_PLAYERS_MESSAGE);
    }

    #[tokio::test]
    async fn different_games_report_no_match_with_viewer_name() {
        let h = handler(
            vec![
                player("me", "Lulu", "Valorant", "Avançado"),
                player("other", "Bia", "League of Legends", "Avançado"),
            ],
            Arc::new(InMemoryRatingRepository::new()),
        );

        let result = h.handle(query("me")).await.unwrap();

        assert_eq!(result.outcome, RankOutcome::NoCompatibleMatch);
        assert_eq!(result.message, "END_OF_MATCHES: Nenhum match para Lulu.");
    }

    #[tokio::test]
    async fn ratings_for_the_shared_game_boost_the_candidate() {
        let ratings = Arc::new(InMemoryRatingRepository::new());
        for (rater, game, stars) in [("x", "valorant", 5), ("y", "Valorant", 5), ("z", "CS2", 1)] {
            let rating = PlayerRating::new(
                id(rater),
                id("rated"),
                Some(game.to_string()),
                StarRating::new(stars).unwrap(),
                Timestamp::now(),
            )
            .unwrap();
            ratings.upsert(&rating).await.unwrap();
        }
        let h = handler(
            vec![
                player("me", "Lulu", "Valorant", "Avançado"),
                player("plain", "Bia", "Valorant", "Avançado"),
                player("rated", "Caio", "Valorant", "Avançado"),
            ],
            ratings,
        );

        let result = h.handle(query("me")).await.unwrap();
        let matches = result.outcome.matches();

        assert_eq!(result.message, MATCHES_FOUND_MESSAGE);
        assert_eq!(matches[0].user_id, id("rated"));
        assert!(matches[0].rationale.ends_with("Bem avaliado (⭐5.0, +4.0)"));
        assert_eq!(matches[0].score - matches[1].score, 4.0);
    }

    #[tokio::test]
    async fn failing_rating_lookups_only_drop_the_boost() {
        let h = handler(
            vec![
                player("me", "Lulu", "Valorant", "Avançado"),
                player("other", "Bia", "Valorant", "Avançado"),
            ],
            Arc::new(FailingRatings),
        );

        let result = h.handle(query("me")).await.unwrap();

        assert_eq!(result.outcome.matches().len(), 1);
        assert!(!result.outcome.matches()[0].rationale.contains("Bem avaliado"));
    }

    #[tokio::test]
    async fn results_are_capped_by_the_ranker_limit() {
        let mut profiles = vec![player("me", "Lulu", "Valorant", "Avançado")];
        for i in 0..5 {
            profiles.push(player(&format!("p{}", i), "Bia", "Valorant", "Iniciante"));
        }
        let h = handler(profiles, Arc::new(InMemoryRatingRepository::new()));

        let result = h.handle(query("me")).await.unwrap();

        assert_eq!(result.outcome.matches().len(), 3);
        let ids: Vec<&str> = result.outcome.matches().iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2"]);
    }
}
