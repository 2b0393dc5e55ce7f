use crate::answers::{AnswerIssue, Answers};
use crate::types::scoring::QuizResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A scored result plus the facts about how it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub generated_at: DateTime<Utc>,
    pub fingerprint: String,
    pub answered: usize,
    pub result: QuizResult,
    pub issues: Vec<AnswerIssue>,
}

impl QuizReport {
    pub fn new(result: QuizResult, answers: &Answers, issues: Vec<AnswerIssue>) -> Self {
        Self {
            generated_at: Utc::now(),
            fingerprint: answers.fingerprint(),
            answered: answers.len(),
            result,
            issues,
        }
    }
}
