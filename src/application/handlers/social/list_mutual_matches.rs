//! ListMutualMatches query handler.

use serde::Serialize;
use std::sync::Arc;

use super::record_like::LikeError;
use crate::domain::foundation::UserId;
use crate::domain::matching::DEFAULT_CANDIDATE_NAME;
use crate::domain::profile::ProfileField;
use crate::ports::{LikeRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct ListMutualMatchesQuery {
    pub user_id: UserId,
}

/// A player who liked the user back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutualMatch {
    pub user_id: UserId,
    pub display_name: String,
    /// Primary game as stated, empty when the player has no profile.
    pub primary_game: String,
}

pub struct ListMutualMatchesHandler {
    likes: Arc<dyn LikeRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ListMutualMatchesHandler {
    pub fn new(likes: Arc<dyn LikeRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { likes, profiles }
    }

    /// Mutual matches in the order the user liked them.
    pub async fn handle(&self, query: ListMutualMatchesQuery) -> Result<Vec<MutualMatch>, LikeError> {
        let mut matches = Vec::new();

        for other in self.likes.liked_by(&query.user_id).await? {
            if !self.likes.exists(&other, &query.user_id).await? {
                continue;
            }

            let profile = self.profiles.find_by_user(&other).await?;
            let display_name = profile
                .as_ref()
                .and_then(|p| p.stated_display_name())
                .unwrap_or(DEFAULT_CANDIDATE_NAME)
                .to_string();
            let primary_game = profile
                .as_ref()
                .map(|p| p.text(ProfileField::PrimaryGame).to_string())
                .unwrap_or_default();

            matches.push(MutualMatch {
                user_id: other,
                display_name,
                primary_game,
            });
        }

        tracing::debug!(user_id = %query.user_id, count = matches.len(), "Listed mutual matches");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryLikeRepository, InMemoryProfileRepository};
    use crate::domain::foundation::Timestamp;
    use crate::domain::profile::PlayerProfile;
    use crate::domain::social::Like;

    fn id(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    async fn likes(pairs: &[(&str, &str)]) -> Arc<InMemoryLikeRepository> {
        let repo = Arc::new(InMemoryLikeRepository::new());
        for (liker, liked) in pairs {
            repo.record(&Like::new(id(liker), id(liked), Timestamp::now()).unwrap())
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn only_reciprocated_likes_are_listed() {
        let likes = likes(&[
            ("me", "bia"),
            ("bia", "me"),
            ("me", "caio"),
            ("dani", "me"),
        ])
        .await;
        let profiles = InMemoryProfileRepository::with_profiles(vec![PlayerProfile::new(id("bia"))
            .with_field(ProfileField::DisplayName, "Bia")
            .with_field(ProfileField::PrimaryGame, "Valorant")]);
        let h = ListMutualMatchesHandler::new(likes, Arc::new(profiles));

        let matches = h
            .handle(ListMutualMatchesQuery { user_id: id("me") })
            .await
            .unwrap();

        assert_eq!(
            matches,
            vec![MutualMatch {
                user_id: id("bia"),
                display_name: "Bia".to_string(),
                primary_game: "Valorant".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn match_without_profile_uses_defaults() {
        let likes = likes(&[("me", "ghost"), ("ghost", "me")]).await;
        let h = ListMutualMatchesHandler::new(likes, Arc::new(InMemoryProfileRepository::new()));

        let matches = h
            .handle(ListMutualMatchesQuery { user_id: id("me") })
            .await
            .unwrap();

        assert_eq!(matches[0].display_name, DEFAULT_CANDIDATE_NAME);
        assert_eq!(matches[0].primary_game, "");
    }
}
