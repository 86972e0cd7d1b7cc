//! Star rating value object for post-match player ratings (1 to 5 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Star rating one player gives another after playing together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a StarRating, returning error if outside 1..=5.
    pub fn new(stars: i64) -> Result<Self, ValidationError> {
        if stars < Self::MIN as i64 || stars > Self::MAX as i64 {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                stars.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(stars as u8))
    }

    /// Returns the number of stars.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.0)
    }
}
