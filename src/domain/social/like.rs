//! One player liking another.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// A like from `liker` to `liked`. At most one exists per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub liker: UserId,
    pub liked: UserId,
    pub created_at: Timestamp,
}

impl Like {
    /// Creates a like, rejecting players who like themselves.
    pub fn new(liker: UserId, liked: UserId, created_at: Timestamp) -> Result<Self, ValidationError> {
        if liker == liked {
            return Err(ValidationError::invalid_format(
                "liked",
                "players cannot like themselves",
            ));
        }
        Ok(Self {
            liker,
            liked,
            created_at,
        })
    }
}
