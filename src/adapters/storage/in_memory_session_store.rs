//! In-Memory Dialogue Session Store
//!
//! Keeps dialogue sessions in memory and expires idle ones after a TTL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::DialogueSessionStore;

/// Idle time after which a session is discarded, in seconds.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1800;

/// In-memory storage for dialogue sessions
#[derive(Debug, Clone)]
pub struct InMemoryDialogueSessionStore {
    sessions: Arc<RwLock<HashMap<UserId, DialogueSession>>>,
    ttl_secs: u64,
}

impl InMemoryDialogueSessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of stored sessions, expired ones included
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemoryDialogueSessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL_SECS)
    }
}

#[async_trait]
impl DialogueSessionStore for InMemoryDialogueSessionStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<DialogueSession>, DomainError> {
        let now = Timestamp::now();
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(user_id)
            .filter(|session| !session.is_expired(self.ttl_secs, now))
            .cloned())
    }

    async fn save(&self, session: &DialogueSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.user_id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.sessions.write().await.remove(user_id);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.ttl_secs, now));
        let purged = before - sessions.len();

        if purged > 0 {
            tracing::debug!(purged, "Purged expired dialogue sessions");
        }
        Ok(purged)
    }
}
