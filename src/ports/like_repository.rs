//! LikeRepository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::social::Like;

/// Outcome of recording a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeRecorded {
    Created,
    AlreadyExisted,
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Records a like. Recording the same pair twice is not an error.
    async fn record(&self, like: &Like) -> Result<LikeRecorded, DomainError>;

    /// True when `liker` has liked `liked`.
    async fn exists(&self, liker: &UserId, liked: &UserId) -> Result<bool, DomainError>;

    /// Players `user` has liked, oldest like first.
    async fn liked_by(&self, user: &UserId) -> Result<Vec<UserId>, DomainError>;
}
