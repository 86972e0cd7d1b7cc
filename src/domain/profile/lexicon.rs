//! Lexicons mapping free-form profile answers onto comparable values.
//!
//! Unknown answers map to an explicit `Unknown` variant so that "cannot
//! compare" never looks like a low rank.

use serde::{Deserialize, Serialize};

/// Lower-cases and trims a raw answer for comparison.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized answers that carry no information.
const UNSPECIFIED_MARKERS: [&str; 3] = ["não especificado", "n/a", "n/e"];

/// Normalized answer meaning the player chose not to share.
pub const PRIVATE_MARKER: &str = "prefiro não dizer";

/// True when a normalized answer is one of the "no information" markers.
pub fn is_unspecified_marker(normalized: &str) -> bool {
    UNSPECIFIED_MARKERS.contains(&normalized)
}

/// A value with an ordinal rank, or no rank when unknown.
pub trait Ordinal {
    fn rank(&self) -> Option<u8>;
}

/// Self-reported skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Casual,
    Intermediate,
    Advanced,
    Pro,
    Unknown,
}

impl SkillLevel {
    /// Maps a free-form answer onto the lexicon.
    pub fn from_label(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "iniciante" | "novo" | "sou novo" | "ainda aprendendo" | "comecei agora" => {
                Self::Beginner
            }
            "casual" | "jogo por diversão" => Self::Casual,
            "intermediário" | "mediano" => Self::Intermediate,
            "avançado" => Self::Advanced,
            "competitivo/pro" => Self::Pro,
            _ => Self::Unknown,
        }
    }
}

impl Ordinal for SkillLevel {
    fn rank(&self) -> Option<u8> {
        match self {
            Self::Beginner => Some(1),
            Self::Casual => Some(2),
            Self::Intermediate => Some(3),
            Self::Advanced => Some(4),
            Self::Pro => Some(5),
            Self::Unknown => None,
        }
    }
}

/// In-game voice/chat preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    FocusedSilence,
    CallsOnly,
    CasualChat,
    Situational,
    AnythingGoes,
    Unknown,
}

impl CommunicationStyle {
    /// Maps a free-form answer onto the lexicon.
    pub fn from_label(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "no silêncio (foco total)" => Self::FocusedSilence,
            "só o necessário (calls estratégicas)" => Self::CallsOnly,
            "conversa casual e social" => Self::CasualChat,
            "depende do momento/jogo" => Self::Situational,
            "vale tudo (cantar, zoar, resenha!)" | "com música e zoeira" => Self::AnythingGoes,
            _ => Self::Unknown,
        }
    }
}

impl Ordinal for CommunicationStyle {
    fn rank(&self) -> Option<u8> {
        match self {
            Self::FocusedSilence => Some(1),
            Self::CallsOnly => Some(2),
            // situational players sit with the social talkers
            Self::CasualChat | Self::Situational => Some(3),
            Self::AnythingGoes => Some(4),
            Self::Unknown => None,
        }
    }
}
