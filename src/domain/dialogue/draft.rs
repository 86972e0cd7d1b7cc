//! Merge of collected answers into a stored profile.

use std::collections::BTreeMap;

use super::DialogueSession;
use crate::domain::foundation::UserId;
use crate::domain::profile::{FieldValue, PlayerProfile, ProfileField};

/// Answers collected by a finished dialogue, ready to be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    user_id: UserId,
    values: BTreeMap<ProfileField, FieldValue>,
}

impl ProfileDraft {
    pub fn new(user_id: UserId, values: BTreeMap<ProfileField, FieldValue>) -> Self {
        Self { user_id, values }
    }

    pub fn from_session(session: &DialogueSession) -> Self {
        Self::new(session.user_id.clone(), session.collected().clone())
    }

    /// Applies the draft to `existing` (or a fresh profile) and marks it complete.
    ///
    /// Collected answers overwrite. A field with no collected answer keeps its
    /// stored value, or becomes `Unspecified` if it was never set. Applying the
    /// same draft twice gives the same profile.
    pub fn merge_into(&self, existing: Option<PlayerProfile>) -> PlayerProfile {
        let mut profile = existing.unwrap_or_else(|| PlayerProfile::new(self.user_id.clone()));

        for field in ProfileField::SEQUENCE {
            match self.values.get(&field) {
                Some(value) => profile.set_field(field, value.clone()),
                None if profile.field(field).is_none() => {
                    profile.set_field(field, FieldValue::Unspecified)
                }
                None => {}
            }
        }

        profile.complete = true;
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("u-1").unwrap()
    }

    fn draft(pairs: &[(ProfileField, &str)]) -> ProfileDraft {
        ProfileDraft::new(
            user(),
            pairs.iter().map(|(f, v)| (*f, FieldValue::new(*v))).collect(),
        )
    }

    #[test]
    fn fresh_profile_fills_missing_with_unspecified() {
        let profile = draft(&[(ProfileField::PrimaryGame, "Valorant")]).merge_into(None);

        assert!(profile.complete);
        assert!(profile.is_fully_populated());
        assert_eq!(profile.text(ProfileField::PrimaryGame), "Valorant");
        assert_eq!(profile.field(ProfileField::Gender), Some(&FieldValue::Unspecified));
    }

    #[test]
    fn stored_values_survive_when_not_collected() {
        let existing = PlayerProfile::new(user()).with_field(ProfileField::Availability, "Noites");

        let profile = draft(&[(ProfileField::DisplayName, "Lulu")]).merge_into(Some(existing));

        assert_eq!(profile.text(ProfileField::Availability), "Noites");
        assert_eq!(profile.text(ProfileField::DisplayName), "Lulu");
    }

    #[test]
    fn collected_unspecified_overwrites_stored_value() {
        let existing = PlayerProfile::new(user()).with_field(ProfileField::Gender, "Mulher");

        let profile = draft(&[(ProfileField::Gender, "")]).merge_into(Some(existing));

        assert_eq!(profile.field(ProfileField::Gender), Some(&FieldValue::Unspecified));
    }

    #[test]
    fn merge_is_idempotent() {
        let d = draft(&[
            (ProfileField::DisplayName, "Lulu"),
            (ProfileField::SkillLevel, "Casual"),
        ]);
        let existing = PlayerProfile::new(user()).with_field(ProfileField::PlayStyle, "Tryhard");

        let once = d.merge_into(Some(existing));
        let twice = d.merge_into(Some(once.clone()));

        assert_eq!(once, twice);
    }
}
