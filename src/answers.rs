//! Answer maps: loading, validation against the catalog, fingerprinting.

use crate::catalog::{self, QuestionKind};
use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Question id to raw answer. Blank answers are never stored, so a missing
/// key is the only way a question can be unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raw` under `id`. A blank value clears any previous answer
    /// and returns `false`.
    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) -> bool {
        let id = id.into();
        let raw = raw.into();
        if raw.trim().is_empty() {
            self.0.remove(&id);
            return false;
        }
        self.0.insert(id, raw);
        true
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, raw)| (id.as_str(), raw.as_str()))
    }

    /// Hex SHA-256 over the answers in key order. Every id and answer is
    /// length-prefixed, so free text cannot imitate another entry.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (id, raw) in self.iter() {
            for field in [id, raw] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

impl<K, V> FromIterator<(K, V)> for Answers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (id, raw) in iter {
            answers.insert(id, raw);
        }
        answers
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Text(String),
    Integer(i64),
}

impl From<RawAnswer> for String {
    fn from(raw: RawAnswer) -> Self {
        match raw {
            RawAnswer::Text(text) => text,
            RawAnswer::Integer(value) => value.to_string(),
        }
    }
}

pub fn is_answer_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("toml")
    )
}

/// Reads a flat JSON object or TOML table of `question-id = answer`.
pub fn load_answers(path: &Path) -> Result<Answers> {
    if !path.exists() {
        return Err(QuizError::AnswersNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let raw: BTreeMap<String, RawAnswer> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| QuizError::AnswersParse(format!("{}: {}", path.display(), e)))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| QuizError::AnswersParse(format!("{}: {}", path.display(), e)))?,
        _ => {
            return Err(QuizError::UnsupportedAnswerFormat(
                path.display().to_string(),
            ))
        }
    };
    let answers: Answers = raw
        .into_iter()
        .map(|(id, value)| (id, String::from(value)))
        .collect();
    tracing::debug!(path = %path.display(), answered = answers.len(), "loaded answers");
    Ok(answers)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerIssue {
    UnknownQuestion { id: String },
    Missing { id: &'static str },
    ScaleOutOfRange { id: &'static str, value: String },
    UnknownOption { id: &'static str, value: String },
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerIssue::UnknownQuestion { id } => write!(f, "{id}: not a quiz question"),
            AnswerIssue::Missing { id } => write!(f, "{id}: unanswered"),
            AnswerIssue::ScaleOutOfRange { id, value } => {
                write!(f, "{id}: '{value}' is not a scale value 1-5 (ignored)")
            }
            AnswerIssue::UnknownOption { id, value } => {
                write!(f, "{id}: '{value}' is not a listed option")
            }
        }
    }
}

/// Reports everything about `answers` that scoring will ignore or default.
/// Never alters how the answers score.
pub fn validate_answers(answers: &Answers) -> Vec<AnswerIssue> {
    let mut issues: Vec<AnswerIssue> = answers
        .iter()
        .filter(|(id, _)| catalog::question_by_id(id).is_none())
        .map(|(id, _)| AnswerIssue::UnknownQuestion { id: id.to_string() })
        .collect();

    for question in catalog::questions() {
        let Some(raw) = answers.get(question.id) else {
            issues.push(AnswerIssue::Missing { id: question.id });
            continue;
        };
        match question.kind {
            QuestionKind::Scale { .. } => {
                if !matches!(raw.trim().parse::<u8>(), Ok(1..=5)) {
                    issues.push(AnswerIssue::ScaleOutOfRange {
                        id: question.id,
                        value: raw.to_string(),
                    });
                }
            }
            QuestionKind::Single { .. } | QuestionKind::Categorical { .. } => {
                if question.option(raw).is_none() {
                    issues.push(AnswerIssue::UnknownOption {
                        id: question.id,
                        value: raw.to_string(),
                    });
                }
            }
            QuestionKind::Text { .. } => {}
        }
    }
    issues
}
