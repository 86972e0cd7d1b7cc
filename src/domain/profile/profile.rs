//! Player profile record.

use serde::{Deserialize, Serialize};

use super::{FieldValue, ProfileField};
use crate::domain::foundation::UserId;

/// Gamer profile built through the dialogue.
///
/// A field is `None` until it has ever been set. Once `complete` is true
/// every field holds a value, using `FieldValue::Unspecified` for answers
/// the player declined to give.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<FieldValue>,
    #[serde(default)]
    pub primary_game: Option<FieldValue>,
    #[serde(default)]
    pub skill_level: Option<FieldValue>,
    #[serde(default)]
    pub play_style: Option<FieldValue>,
    #[serde(default)]
    pub availability: Option<FieldValue>,
    #[serde(default)]
    pub gender: Option<FieldValue>,
    #[serde(default)]
    pub communication_style: Option<FieldValue>,
    #[serde(default)]
    pub complete: bool,
}

impl PlayerProfile {
    /// Creates an empty, incomplete profile.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
            primary_game: None,
            skill_level: None,
            play_style: None,
            availability: None,
            gender: None,
            communication_style: None,
            complete: false,
        }
    }

    /// Sets a field and returns the profile (builder style).
    pub fn with_field(mut self, field: ProfileField, value: impl Into<FieldValue>) -> Self {
        self.set_field(field, value.into());
        self
    }

    /// Marks the profile complete (builder style).
    pub fn completed(mut self) -> Self {
        self.complete = true;
        self
    }

    pub fn field(&self, field: ProfileField) -> Option<&FieldValue> {
        self.slot(field).as_ref()
    }

    pub fn set_field(&mut self, field: ProfileField, value: FieldValue) {
        *self.slot_mut(field) = Some(value);
    }

    /// True when every field of the sequence holds a value.
    pub fn is_fully_populated(&self) -> bool {
        ProfileField::SEQUENCE.iter().all(|f| self.field(*f).is_some())
    }

    /// Text of a field for comparison; missing fields read as empty.
    pub fn text(&self, field: ProfileField) -> &str {
        self.field(field).map(FieldValue::as_str).unwrap_or("")
    }

    /// Stated display name, if any.
    pub fn stated_display_name(&self) -> Option<&str> {
        self.display_name
            .as_ref()
            .and_then(FieldValue::specified)
            .filter(|name| !name.trim().is_empty())
    }

    fn slot(&self, field: ProfileField) -> &Option<FieldValue> {
        match field {
            ProfileField::DisplayName => &self.display_name,
            ProfileField::PrimaryGame => &self.primary_game,
            ProfileField::SkillLevel => &self.skill_level,
            ProfileField::PlayStyle => &self.play_style,
            ProfileField::Availability => &self.availability,
            ProfileField::Gender => &self.gender,
            ProfileField::CommunicationStyle => &self.communication_style,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<FieldValue> {
        match field {
            ProfileField::DisplayName => &mut self.display_name,
            ProfileField::PrimaryGame => &mut self.primary_game,
            ProfileField::SkillLevel => &mut self.skill_level,
            ProfileField::PlayStyle => &mut self.play_style,
            ProfileField::Availability => &mut self.availability,
            ProfileField::Gender => &mut self.gender,
            ProfileField::CommunicationStyle => &mut self.communication_style,
        }
    }
}
