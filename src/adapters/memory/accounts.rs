//! In-memory AccountReader.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AccountReader;

/// Account directory mapping user ids to login names.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountDirectory {
    accounts: Arc<RwLock<HashMap<UserId, String>>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, user_id: UserId, username: impl Into<String>) {
        self.accounts.write().await.insert(user_id, username.into());
    }
}

#[async_trait]
impl AccountReader for InMemoryAccountDirectory {
    async fn username(&self, user_id: &UserId) -> Result<Option<String>, DomainError> {
        Ok(self.accounts.read().await.get(user_id).cloned())
    }
}
