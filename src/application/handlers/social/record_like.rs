//! RecordLike command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use crate::domain::matching::DEFAULT_CANDIDATE_NAME;
use crate::domain::social::Like;
use crate::ports::{LikeRecorded, LikeRepository, ProfileRepository};

/// Command for one player liking another.
#[derive(Debug, Clone)]
pub struct RecordLikeCommand {
    pub liker: UserId,
    pub liked: UserId,
}

/// Result of recording a like.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordLikeResult {
    pub recorded: LikeRecorded,
    /// Display name of the other player when the like is now mutual.
    pub mutual_with: Option<String>,
}

impl RecordLikeResult {
    pub fn is_mutual(&self) -> bool {
        self.mutual_with.is_some()
    }
}

#[derive(Debug, Clone, Error)]
pub enum LikeError {
    #[error("Invalid like: {0}")]
    Invalid(String),

    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<ValidationError> for LikeError {
    fn from(err: ValidationError) -> Self {
        LikeError::Invalid(err.to_string())
    }
}

impl From<DomainError> for LikeError {
    fn from(err: DomainError) -> Self {
        LikeError::Domain(err.to_string())
    }
}

pub struct RecordLikeHandler {
    likes: Arc<dyn LikeRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl RecordLikeHandler {
    pub fn new(likes: Arc<dyn LikeRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { likes, profiles }
    }

    pub async fn handle(&self, cmd: RecordLikeCommand) -> Result<RecordLikeResult, LikeError> {
        let like = Like::new(cmd.liker, cmd.liked, Timestamp::now())?;
        let recorded = self.likes.record(&like).await?;

        let mutual_with = if self.likes.exists(&like.liked, &like.liker).await? {
            let name = self
                .profiles
                .find_by_user(&like.liked)
                .await?
                .and_then(|p| p.stated_display_name().map(String::from))
                .unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string());
            Some(name)
        } else {
            None
        };

        tracing::info!(
            liker = %like.liker,
            liked = %like.liked,
            recorded = ?recorded,
            mutual = mutual_with.is_some(),
            "Like recorded"
        );

        Ok(RecordLikeResult {
            recorded,
            mutual_with,
        })
    }
}
