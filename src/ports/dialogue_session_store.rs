//! Dialogue Session Store Port - persistence of in-progress profile dialogues.

use async_trait::async_trait;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::{DomainError, UserId};

/// Store of dialogue sessions, one per user.
///
/// Implementations may expire idle sessions; an expired session loads as `None`.
#[async_trait]
pub trait DialogueSessionStore: Send + Sync {
    async fn load(&self, user_id: &UserId) -> Result<Option<DialogueSession>, DomainError>;

    /// Insert or replace the session of `session.user_id`.
    async fn save(&self, session: &DialogueSession) -> Result<(), DomainError>;

    /// Remove a session. Removing a missing session is not an error.
    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError>;

    /// Drop every expired session, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}
