//! Player profile domain.
//!
//! - `ProfileField` / `FieldValue` - the fixed field set and the "unspecified" sentinel
//! - `PlayerProfile` - the per-player record the dialogue fills in
//! - `lexicon` - ordinal lexicons for skill level and communication style

mod field;
pub mod lexicon;
#[allow(clippy::module_inception)]
mod profile;

pub use field::{FieldValue, ProfileField, UNSPECIFIED_LABEL};
pub use lexicon::{CommunicationStyle, Ordinal, SkillLevel};
pub use profile::PlayerProfile;
