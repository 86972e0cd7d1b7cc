//! Profile dialogue domain.
//!
//! A session walks the fixed profile questions one message at a time.
//! Interpretation of free text happens outside the domain; this module only
//! tracks progress and knows the scripted lines.

mod draft;
mod script;
mod session;
mod state;

pub use draft::ProfileDraft;
pub use script::{QuestionScript, ScriptContext, DEFAULT_PLAYER_NAME, GREETING};
pub use session::DialogueSession;
pub use state::DialogueState;
