//! ProfileRepository port for player profile persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::PlayerProfile;

/// Store of player profiles, one per user.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile of a user, if one was ever saved.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PlayerProfile>, DomainError>;

    /// Insert or replace the profile of `profile.user_id`.
    async fn upsert(&self, profile: &PlayerProfile) -> Result<(), DomainError>;

    /// Every profile except `exclude`'s, optionally only complete ones.
    ///
    /// Order is stable between calls so ranking ties resolve the same way.
    async fn list_others(
        &self,
        exclude: &UserId,
        only_complete: bool,
    ) -> Result<Vec<PlayerProfile>, DomainError>;
}
