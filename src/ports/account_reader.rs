//! AccountReader port - read access to the account directory.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait AccountReader: Send + Sync {
    /// Login name of an account, `None` when the account does not exist.
    async fn username(&self, user_id: &UserId) -> Result<Option<String>, DomainError>;
}
