//! Per-user dialogue session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DialogueState;
use crate::domain::foundation::{StateMachine, Timestamp, UserId, ValidationError};
use crate::domain::profile::{FieldValue, ProfileField};

/// Progress of one player through the profile questions.
///
/// `question_index` only moves forward and never exceeds the number of
/// questions. The session is discarded once the profile is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueSession {
    pub user_id: UserId,
    question_index: usize,
    collected: BTreeMap<ProfileField, FieldValue>,
    last_user_response: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DialogueSession {
    pub fn new(user_id: UserId, now: Timestamp) -> Self {
        Self {
            user_id,
            question_index: 0,
            collected: BTreeMap::new(),
            last_user_response: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> DialogueState {
        DialogueState::from_index(self.question_index)
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn collected(&self) -> &BTreeMap<ProfileField, FieldValue> {
        &self.collected
    }

    pub fn collected_value(&self, field: ProfileField) -> Option<&FieldValue> {
        self.collected.get(&field)
    }

    /// Stated value collected for a field, ignoring the sentinel.
    pub fn stated(&self, field: ProfileField) -> Option<&str> {
        self.collected_value(field).and_then(FieldValue::specified)
    }

    pub fn last_user_response(&self) -> Option<&str> {
        self.last_user_response.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Stores the interpreted answer for a field, replacing any earlier one.
    pub fn record_answer(&mut self, field: ProfileField, value: FieldValue, now: Timestamp) {
        self.collected.insert(field, value);
        self.updated_at = now;
    }

    /// Remembers the raw message. Empty messages keep the previous one.
    pub fn remember_response(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.last_user_response = Some(trimmed.to_string());
        }
    }

    /// Moves to the next question.
    pub fn advance(&mut self, now: Timestamp) -> Result<DialogueState, ValidationError> {
        let current = self.state();
        let next = current.transition_to(current.next())?;
        self.question_index = next.index();
        self.updated_at = now;
        Ok(next)
    }

    /// True when the session has been idle for longer than `ttl_secs`.
    pub fn is_expired(&self, ttl_secs: u64, now: Timestamp) -> bool {
        now.is_after(&self.updated_at.plus_secs(ttl_secs))
    }
}
