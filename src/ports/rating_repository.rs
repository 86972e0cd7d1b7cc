//! RatingRepository port for post-match ratings.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::social::PlayerRating;

/// Whether an upsert created a rating or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingUpsert {
    Created,
    Updated,
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Stores a rating keyed by `(rater, rated, game)`, replacing any previous one.
    async fn upsert(&self, rating: &PlayerRating) -> Result<RatingUpsert, DomainError>;

    /// Mean stars received by `user`, optionally only for `game` (case-insensitive).
    ///
    /// `None` when there is nothing to average.
    async fn mean_rating(
        &self,
        user: &UserId,
        game: Option<&str>,
    ) -> Result<Option<f64>, DomainError>;
}
