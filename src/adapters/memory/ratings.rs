//! In-memory RatingRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::social::PlayerRating;
use crate::ports::{RatingRepository, RatingUpsert};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingRepository {
    ratings: Arc<RwLock<Vec<PlayerRating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.ratings.read().await.len()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert(&self, rating: &PlayerRating) -> Result<RatingUpsert, DomainError> {
        let mut ratings = self.ratings.write().await;
        match ratings.iter_mut().find(|r| r.same_key(rating)) {
            Some(existing) => {
                *existing = rating.clone();
                Ok(RatingUpsert::Updated)
            }
            None => {
                ratings.push(rating.clone());
                Ok(RatingUpsert::Created)
            }
        }
    }

    async fn mean_rating(
        &self,
        user: &UserId,
        game: Option<&str>,
    ) -> Result<Option<f64>, DomainError> {
        let ratings = self.ratings.read().await;
        let stars: Vec<f64> = ratings
            .iter()
            .filter(|r| &r.rated == user)
            .filter(|r| game.map_or(true, |g| r.is_for_game(g)))
            .map(|r| f64::from(r.stars.value()))
            .collect();

        if stars.is_empty() {
            return Ok(None);
        }
        Ok(Some(stars.iter().sum::<f64>() / stars.len() as f64))
    }
}
