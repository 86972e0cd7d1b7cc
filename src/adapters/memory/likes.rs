//! In-memory LikeRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::social::Like;
use crate::ports::{LikeRecorded, LikeRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryLikeRepository {
    likes: Arc<RwLock<Vec<Like>>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn record(&self, like: &Like) -> Result<LikeRecorded, DomainError> {
        let mut likes = self.likes.write().await;
        if likes
            .iter()
            .any(|l| l.liker == like.liker && l.liked == like.liked)
        {
            return Ok(LikeRecorded::AlreadyExisted);
        }
        likes.push(like.clone());
        Ok(LikeRecorded::Created)
    }

    async fn exists(&self, liker: &UserId, liked: &UserId) -> Result<bool, DomainError> {
        let likes = self.likes.read().await;
        Ok(likes.iter().any(|l| &l.liker == liker && &l.liked == liked))
    }

    async fn liked_by(&self, user: &UserId) -> Result<Vec<UserId>, DomainError> {
        let likes = self.likes.read().await;
        Ok(likes
            .iter()
            .filter(|l| &l.liker == user)
            .map(|l| l.liked.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn id(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn like(a: &str, b: &str) -> Like {
        Like::new(id(a), id(b), Timestamp::now()).unwrap()
    }

    #[tokio::test]
    async fn recording_twice_is_idempotent() {
        let repo = InMemoryLikeRepository::new();

        assert_eq!(repo.record(&like("a", "b")).await.unwrap(), LikeRecorded::Created);
        assert_eq!(repo.record(&like("a", "b")).await.unwrap(), LikeRecorded::AlreadyExisted);
        assert_eq!(repo.liked_by(&id("a")).await.unwrap(), vec![id("b")]);
    }

    #[tokio::test]
    async fn exists_is_directional() {
        let repo = InMemoryLikeRepository::new();
        repo.record(&like("a", "b")).await.unwrap();

        assert!(repo.exists(&id("a"), &id("b")).await.unwrap());
        assert!(!repo.exists(&id("b"), &id("a")).await.unwrap());
    }
}
