//! Profile dialogue handlers.

mod send_dialogue_message;

pub use send_dialogue_message::{
    DialogueError, DialogueSettings, DialogueStep, ProfileDialogueHandler,
    SendDialogueMessageCommand, DEFAULT_INTERPRETER_TIMEOUT, DEFAULT_MAX_EXTRACTED_LEN,
};
