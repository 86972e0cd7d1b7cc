//! RatePlayer command handler.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, StarRating, Timestamp, UserId, ValidationError};
use crate::domain::social::PlayerRating;
use crate::ports::{AccountReader, RatingRepository, RatingUpsert};

/// Command for rating a teammate after a match.
#[derive(Debug, Clone)]
pub struct RatePlayerCommand {
    pub rater: UserId,
    pub rated: UserId,
    /// Stars as typed; must be within 1..=5.
    pub stars: i64,
    pub game: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatePlayerResult {
    pub rating: PlayerRating,
    pub outcome: RatingUpsert,
}

#[derive(Debug, Clone, Error)]
pub enum RatePlayerError {
    #[error("Invalid rating: {0}")]
    Invalid(String),

    #[error("Players cannot rate themselves")]
    SelfRating,

    #[error("Unknown player: {0}")]
    UnknownPlayer(UserId),

    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<ValidationError> for RatePlayerError {
    fn from(err: ValidationError) -> Self {
        RatePlayerError::Invalid(err.to_string())
    }
}

impl From<DomainError> for RatePlayerError {
    fn from(err: DomainError) -> Self {
        RatePlayerError::Domain(err.to_string())
    }
}

pub struct RatePlayerHandler {
    ratings: Arc<dyn RatingRepository>,
    accounts: Arc<dyn AccountReader>,
}

impl RatePlayerHandler {
    pub fn new(ratings: Arc<dyn RatingRepository>, accounts: Arc<dyn AccountReader>) -> Self {
        Self { ratings, accounts }
    }

    pub async fn handle(&self, cmd: RatePlayerCommand) -> Result<RatePlayerResult, RatePlayerError> {
        if cmd.rater == cmd.rated {
            return Err(RatePlayerError::SelfRating);
        }
        let stars = StarRating::new(cmd.stars)?;

        if self.accounts.username(&cmd.rated).await?.is_none() {
            return Err(RatePlayerError::UnknownPlayer(cmd.rated));
        }

        let rating = PlayerRating::new(cmd.rater, cmd.rated, cmd.game, stars, Timestamp::now())?;
        let outcome = self.ratings.upsert(&rating).await?;

        tracing::info!(
            rater = %rating.rater,
            rated = %rating.rated,
            stars = rating.stars.value(),
            outcome = ?outcome,
            "Player rated"
        );

        Ok(RatePlayerResult { rating, outcome })
    }
}
