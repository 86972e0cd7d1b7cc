//! AuthorizeMessage command handler.
//!
//! Decides whether a chat message may be sent. Delivery happens elsewhere.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::LikeRepository;

#[derive(Debug, Clone)]
pub struct AuthorizeMessageCommand {
    pub sender: UserId,
    pub recipient: UserId,
    pub content: String,
}

/// A message cleared for delivery, content trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedMessage {
    pub sender: UserId,
    pub recipient: UserId,
    pub content: String,
}

#[derive(Debug, Clone, Error)]
pub enum MessageGateError {
    #[error("Message content cannot be empty")]
    EmptyContent,

    #[error("Players cannot message themselves")]
    SelfMessage,

    #[error("Only mutual matches can exchange messages")]
    NotMatched,

    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<DomainError> for MessageGateError {
    fn from(err: DomainError) -> Self {
        MessageGateError::Domain(err.to_string())
    }
}

pub struct AuthorizeMessageHandler {
    likes: Arc<dyn LikeRepository>,
}

impl AuthorizeMessageHandler {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    pub async fn handle(
        &self,
        cmd: AuthorizeMessageCommand,
    ) -> Result<AuthorizedMessage, MessageGateError> {
        let content = cmd.content.trim();
        if content.is_empty() {
            return Err(MessageGateError::EmptyContent);
        }
        if cmd.sender == cmd.recipient {
            return Err(MessageGateError::SelfMessage);
        }

        let mutual = self.likes.exists(&cmd.sender, &cmd.recipient).await?
            && self.likes.exists(&cmd.recipient, &cmd.sender).await?;
        if !mutual {
            tracing::debug!(sender = %cmd.sender, recipient = %cmd.recipient, "Message blocked");
            return Err(MessageGateError::NotMatched);
        }

        Ok(AuthorizedMessage {
            content: content.to_string(),
            sender: cmd.sender,
            recipient: cmd.recipient,
        })
    }
}
