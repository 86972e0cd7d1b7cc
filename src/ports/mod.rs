//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ProfileRepository` - Player profiles
//! - `RatingRepository` - Post-match star ratings
//! - `LikeRepository` - Likes between players
//! - `DialogueSessionStore` - In-progress profile dialogues
//! - `AccountReader` - Account directory (login names)
//!
//! ## Text Ports
//!
//! - `AIProvider` - LLM completions
//! - `TextInterpreter` - Answer extraction and question phrasing

mod account_reader;
mod ai_provider;
mod dialogue_session_store;
mod like_repository;
mod profile_repository;
mod rating_repository;
mod text_interpreter;

pub use account_reader::AccountReader;
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use dialogue_session_store::DialogueSessionStore;
pub use like_repository::{LikeRecorded, LikeRepository};
pub use profile_repository::ProfileRepository;
pub use rating_repository::{RatingRepository, RatingUpsert};
pub use text_interpreter::{Extraction, InterpreterError, PromptRequest, TextInterpreter};
