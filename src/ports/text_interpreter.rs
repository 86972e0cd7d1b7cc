//! Text Interpreter Port - turns free chat text into profile answers and
//! phrases the next question.
//!
//! The dialogue treats the interpreter as optional: any error (or no
//! interpreter at all) falls back to raw text and scripted questions.

use async_trait::async_trait;

use super::AIError;
use crate::domain::profile::ProfileField;

/// What the interpreter read from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Value(String),
    /// The message did not answer the question.
    Unspecified,
}

/// Context for phrasing the question about `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub field: ProfileField,
    /// Scripted question, already filled in, used as the idea to rephrase.
    pub suggestion: String,
    pub display_name: Option<String>,
    pub primary_game: Option<String>,
    /// Raw text of the player's last message, to comment on.
    pub previous_answer: Option<String>,
    /// True for the first question of a session.
    pub is_first: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    #[error("provider error: {0}")]
    Provider(#[from] AIError),

    #[error("empty response from interpreter")]
    EmptyResponse,
}

#[async_trait]
pub trait TextInterpreter: Send + Sync {
    /// Reads the answer for `field` out of `text`.
    async fn extract(&self, text: &str, field: ProfileField) -> Result<Extraction, InterpreterError>;

    /// Writes the next question for the player.
    async fn generate_prompt(&self, request: &PromptRequest) -> Result<String, InterpreterError>;
}
