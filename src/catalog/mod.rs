//! Static question catalog.
//!
//! Sections are listed in presentation order. Every scored section carries
//! the dimension its questions feed; the intake section carries none.

mod data;

use serde::Serialize;
use std::fmt;

pub use data::{READINESS_QUESTIONS, RESPONDENT_QUESTION, SCALE_LABELS};

/// Direction in which a displayed metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    LowerIsBetter,
    HigherIsBetter,
}

impl Polarity {
    pub fn label(self) -> &'static str {
        match self {
            Polarity::LowerIsBetter => "Lower is better",
            Polarity::HigherIsBetter => "Higher is better",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    #[serde(rename = "RO")]
    Ro,
    #[serde(rename = "EO")]
    Eo,
    #[serde(rename = "BD")]
    Bd,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "SS")]
    Ss,
    #[serde(rename = "RS")]
    Rs,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Ro,
        Dimension::Eo,
        Dimension::Bd,
        Dimension::Bb,
        Dimension::Sp,
        Dimension::Ss,
        Dimension::Rs,
    ];

    /// Facets where a high score means more drain.
    pub const BURDENS: [Dimension; 4] =
        [Dimension::Ro, Dimension::Eo, Dimension::Bd, Dimension::Bb];

    /// Facets where a high score means more support.
    pub const STRENGTHS: [Dimension; 2] = [Dimension::Sp, Dimension::Ss];

    pub fn code(self) -> &'static str {
        match self {
            Dimension::Ro => "RO",
            Dimension::Eo => "EO",
            Dimension::Bd => "BD",
            Dimension::Bb => "BB",
            Dimension::Sp => "SP",
            Dimension::Ss => "SS",
            Dimension::Rs => "RS",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Ro => "Responsibility Load",
            Dimension::Eo => "Emotional Overwhelm",
            Dimension::Bd => "Body & Health Drain",
            Dimension::Bb => "Belief Blocks",
            Dimension::Sp => "Spiritual Alignment",
            Dimension::Ss => "Support & Environment",
            Dimension::Rs => "Readiness for Transformation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Dimension::Ro => "⚖️",
            Dimension::Eo => "💭",
            Dimension::Bd => "🌿",
            Dimension::Bb => "🔓",
            Dimension::Sp => "✨",
            Dimension::Ss => "🤝",
            Dimension::Rs => "🚀",
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Dimension::Ro | Dimension::Eo | Dimension::Bd | Dimension::Bb => {
                Polarity::LowerIsBetter
            }
            Dimension::Sp | Dimension::Ss | Dimension::Rs => Polarity::HigherIsBetter,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One selectable answer of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl ChoiceOption {
    pub const fn plain(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            score: None,
        }
    }

    pub const fn scored(value: &'static str, label: &'static str, score: u8) -> Self {
        Self {
            value,
            label,
            score: Some(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Text {
        placeholder: &'static str,
    },
    Single {
        options: &'static [ChoiceOption],
    },
    Categorical {
        options: &'static [ChoiceOption],
    },
    /// Five-point agreement scale. `reverse` inverts the mapped score.
    Scale {
        reverse: bool,
    },
}

impl QuestionKind {
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self {
            QuestionKind::Single { options } | QuestionKind::Categorical { options } => options,
            QuestionKind::Text { .. } | QuestionKind::Scale { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub scored: bool,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&'static ChoiceOption> {
        self.kind.options().iter().find(|option| option.value == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    pub questions: &'static [Question],
}

pub fn all_sections() -> &'static [Section] {
    data::SECTIONS
}

/// Every question in presentation order.
pub fn questions() -> impl Iterator<Item = &'static Question> {
    all_sections()
        .iter()
        .flat_map(|section| section.questions.iter())
}

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    questions().find(|question| question.id == id)
}

pub fn section_by_dimension(dimension: Dimension) -> Option<&'static Section> {
    all_sections()
        .iter()
        .find(|section| section.dimension == Some(dimension))
}
