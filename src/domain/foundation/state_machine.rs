//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle types (such as the profile dialogue state) one way to
//! validate transitions before they are applied.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define the legal edges; validated transitions and
/// terminal-state detection come for free.
///
/// ```ignore
/// let next = DialogueState::AwaitingField(2).transition_to(DialogueState::AwaitingField(3))?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
