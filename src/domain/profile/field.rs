//! Profile fields and their values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text stored for a field the player declined or failed to answer.
pub const UNSPECIFIED_LABEL: &str = "Não especificado";

/// One of the fixed profile fields, in the order the dialogue asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    DisplayName,
    PrimaryGame,
    SkillLevel,
    PlayStyle,
    Availability,
    Gender,
    CommunicationStyle,
}

impl ProfileField {
    /// Number of fields in the question sequence.
    pub const COUNT: usize = 7;

    /// Fixed question order.
    pub const SEQUENCE: [ProfileField; Self::COUNT] = [
        ProfileField::DisplayName,
        ProfileField::PrimaryGame,
        ProfileField::SkillLevel,
        ProfileField::PlayStyle,
        ProfileField::Availability,
        ProfileField::Gender,
        ProfileField::CommunicationStyle,
    ];

    /// Field asked at `index` in the sequence, if any.
    pub fn at(index: usize) -> Option<Self> {
        Self::SEQUENCE.get(index).copied()
    }

    /// Position of this field in the sequence.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Last field of the sequence.
    pub fn last() -> Self {
        Self::SEQUENCE[Self::COUNT - 1]
    }

    /// Stable snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::DisplayName => "display_name",
            Self::PrimaryGame => "primary_game",
            Self::SkillLevel => "skill_level",
            Self::PlayStyle => "play_style",
            Self::Availability => "availability",
            Self::Gender => "gender",
            Self::CommunicationStyle => "communication_style",
        }
    }

    /// What the field means, phrased for the text interpretation service.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DisplayName => "Nome de display ou apelido do jogador",
            Self::PrimaryGame => "Principal jogo de interesse do jogador",
            Self::SkillLevel => "Nível de habilidade do jogador no jogo principal",
            Self::PlayStyle => "Estilo de jogo preferido do jogador",
            Self::Availability => "Disponibilidade geral do jogador para jogar",
            Self::Gender => "Identidade de gênero do jogador",
            Self::CommunicationStyle => {
                "Preferência de comunicação do jogador durante o jogo (ex: no silêncio, conversa, vale tudo cantar e zoar)"
            }
        }
    }

    /// Closed answer set the extraction should snap to, for categorical fields.
    pub fn categories(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::SkillLevel => Some(&[
                "Iniciante",
                "Casual",
                "Intermediário",
                "Avançado",
                "Competitivo/Pro",
                "Ainda aprendendo",
                "Jogo por diversão",
                "Mediano",
                "Sou tryhard",
                "Sou pro player",
                "Comecei agora",
            ]),
            Self::PlayStyle => Some(&[
                "Focado em Diversão/Casual",
                "Competitivo/Subir de Ranking",
                "Completar Missões/História",
                "Explorar Mundos",
                "Socializar com amigos",
                "Variado/Depende do humor",
                "Tryhard",
            ]),
            Self::Gender => Some(&[
                "Mulher",
                "Homem",
                "Não-binário",
                "Gênero fluido",
                "Agênero",
                "Prefiro não dizer",
                "Outro",
            ]),
            Self::CommunicationStyle => Some(&[
                "No silêncio (foco total)",
                "Só o necessário (calls estratégicas)",
                "Conversa casual e social",
                "Vale tudo (cantar, zoar, resenha!)",
                "Depende do momento/jogo",
                "Com música e zoeira",
            ]),
            Self::DisplayName | Self::PrimaryGame | Self::Availability => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value held by a profile field: a stated answer or the explicit "unspecified" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldValue {
    Specified(String),
    Unspecified,
}

impl FieldValue {
    /// Builds a value from free text. Blank text and the sentinel label become `Unspecified`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.to_lowercase() == UNSPECIFIED_LABEL.to_lowercase() {
            FieldValue::Unspecified
        } else {
            FieldValue::Specified(trimmed.to_string())
        }
    }

    /// Text form; `Unspecified` renders as the sentinel label.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Specified(value) => value,
            FieldValue::Unspecified => UNSPECIFIED_LABEL,
        }
    }

    /// The stated answer, if there is one.
    pub fn specified(&self) -> Option<&str> {
        match self {
            FieldValue::Specified(value) => Some(value),
            FieldValue::Unspecified => None,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, FieldValue::Unspecified)
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        FieldValue::new(raw)
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::new(raw)
    }
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Specified(value) => value,
            FieldValue::Unspecified => UNSPECIFIED_LABEL.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
