//! In-memory ProfileRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::PlayerProfile;
use crate::ports::ProfileRepository;

/// Profiles kept in insertion order, so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<PlayerProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `profiles`.
    pub fn with_profiles(profiles: Vec<PlayerProfile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PlayerProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| &p.user_id == user_id).cloned())
    }

    async fn upsert(&self, profile: &PlayerProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn list_others(
        &self,
        exclude: &UserId,
        only_complete: bool,
    ) -> Result<Vec<PlayerProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .iter()
            .filter(|p| &p.user_id != exclude && (!only_complete || p.complete))
            .cloned()
            .collect())
    }
}
