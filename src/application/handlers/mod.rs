//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dialogue;
pub mod matching;
pub mod social;

pub use dialogue::{
    DialogueError, DialogueSettings, DialogueStep, ProfileDialogueHandler,
    SendDialogueMessageCommand,
};
pub use matching::{FindMatchesError, FindMatchesHandler, FindMatchesQuery, FindMatchesResult};
pub use social::{
    AuthorizeMessageCommand, AuthorizeMessageHandler, AuthorizedMessage, LikeError,
    ListMutualMatchesHandler, ListMutualMatchesQuery, MessageGateError, MutualMatch,
    RatePlayerCommand, RatePlayerError, RatePlayerHandler, RatePlayerResult, RecordLikeCommand,
    RecordLikeHandler, RecordLikeResult,
};
