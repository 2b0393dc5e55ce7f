//! Owned quiz session: a section cursor plus the answers collected so far.
//! Nothing here renders; a front end drives it and displays whatever it
//! returns.

use crate::answers::Answers;
use crate::catalog::{self, Question, QuestionKind, Section};
use crate::scoring::{self, ScoringError, ScoringOptions};
use crate::types::scoring::QuizResult;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("section '{section}' has unanswered questions: {}", .missing.join(", "))]
    Incomplete {
        section: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("invalid answer for {id}: {reason}")]
    InvalidInput { id: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Section(usize),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub section: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        self.section as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section {} of {}", self.section, self.total)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    position: usize,
    answers: Answers,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_section(&self) -> &'static Section {
        &catalog::all_sections()[self.position]
    }

    pub fn is_last_section(&self) -> bool {
        self.position + 1 == catalog::all_sections().len()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn progress(&self) -> Progress {
        Progress {
            section: self.position + 1,
            total: catalog::all_sections().len(),
        }
    }

    /// Stores an answer for any catalog question. A blank answer clears it.
    pub fn record(&mut self, id: &str, raw: &str) -> Result<(), SessionError> {
        let question = catalog::question_by_id(id)
            .ok_or_else(|| SessionError::UnknownQuestion(id.to_string()))?;
        self.answers.insert(question.id, raw);
        Ok(())
    }

    /// Every question is required before leaving a section.
    pub fn unanswered_in_current(&self) -> Vec<&'static str> {
        self.current_section()
            .questions
            .iter()
            .filter(|question| !self.answers.contains(question.id))
            .map(|question| question.id)
            .collect()
    }

    pub fn advance(&mut self) -> Result<Step, SessionError> {
        let missing = self.unanswered_in_current();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete {
                section: self.current_section().key,
                missing,
            });
        }
        if self.is_last_section() {
            return Ok(Step::Complete);
        }
        self.position += 1;
        Ok(Step::Section(self.position))
    }

    /// Steps back one section; returns `false` on the first section.
    pub fn back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.position = 0;
        self.answers = Answers::new();
    }

    pub fn finish(&self, options: &ScoringOptions) -> Result<QuizResult, ScoringError> {
        scoring::evaluate(&self.answers, options)
    }
}

/// Turns typed input into the raw answer stored for `question`. Scale
/// questions take 1-5; choice questions take the 1-based option number or
/// the option value.
pub fn parse_input(question: &'static Question, input: &str) -> Result<String, SessionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SessionError::InvalidInput {
            id: question.id,
            reason: "an answer is required".to_string(),
        });
    }
    match question.kind {
        QuestionKind::Text { .. } => Ok(input.to_string()),
        QuestionKind::Scale { .. } => match input.parse::<u8>() {
            Ok(value @ 1..=5) => Ok(value.to_string()),
            _ => Err(SessionError::InvalidInput {
                id: question.id,
                reason: format!("'{input}' is not a number from 1 to 5"),
            }),
        },
        QuestionKind::Single { options } | QuestionKind::Categorical { options } => {
            let by_number = input
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| options.get(index));
            by_number
                .or_else(|| question.option(input))
                .map(|option| option.value.to_string())
                .ok_or_else(|| SessionError::InvalidInput {
                    id: question.id,
                    reason: format!("'{input}' is not one of the {} options", options.len()),
                })
        }
    }
}
