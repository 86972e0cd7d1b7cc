//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models over the REST API
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmTextInterpreter` - `TextInterpreter` built on any `AIProvider`

mod gemini_provider;
mod llm_interpreter;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use llm_interpreter::LlmTextInterpreter;
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
