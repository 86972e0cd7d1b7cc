//! Dialogue state machine.
//!
//! The state is derived from the session's question index:
//! - `AwaitingField(i)`: the next message answers question `i - 1` (if any)
//!   and the bot then asks question `i`
//! - `Completed`: the next message answers the last question and finalizes

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::profile::ProfileField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    AwaitingField(usize),
    Completed,
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::AwaitingField(0)
    }
}

impl DialogueState {
    /// State for a question index. Indices past the sequence clamp to `Completed`.
    pub fn from_index(index: usize) -> Self {
        if index < ProfileField::COUNT {
            Self::AwaitingField(index)
        } else {
            Self::Completed
        }
    }

    /// Question index this state corresponds to.
    pub fn index(&self) -> usize {
        match self {
            Self::AwaitingField(index) => *index,
            Self::Completed => ProfileField::COUNT,
        }
    }

    /// Field whose answer the next inbound message carries.
    pub fn field_being_answered(&self) -> Option<ProfileField> {
        match self {
            Self::AwaitingField(0) => None,
            Self::AwaitingField(index) => ProfileField::at(index - 1),
            Self::Completed => Some(ProfileField::last()),
        }
    }

    /// Field the bot asks for while in this state.
    pub fn field_to_ask(&self) -> Option<ProfileField> {
        match self {
            Self::AwaitingField(index) => ProfileField::at(*index),
            Self::Completed => None,
        }
    }

    /// True before any question has been asked.
    pub fn is_opening(&self) -> bool {
        matches!(self, Self::AwaitingField(0))
    }

    /// State after asking this state's question.
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl StateMachine for DialogueState {
    fn can_transition_to(&self, target: &Self) -> bool {
        match self {
            Self::AwaitingField(index) if *index < ProfileField::COUNT => *target == self.next(),
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::AwaitingField(index) if *index < ProfileField::COUNT => vec![self.next()],
            _ => vec![],
        }
    }
}
