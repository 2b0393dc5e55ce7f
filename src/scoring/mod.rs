//! Scoring engine: answers -> dimensions -> indices -> EAS -> archetype.
//!
//! Every function here is pure. Rounding only happens when the final
//! [`QuizResult`] is assembled.

pub mod archetype;
pub mod dimension;
pub mod indices;
pub mod insights;
pub mod question;

use crate::answers::Answers;
use crate::catalog::{Dimension, RESPONDENT_QUESTION};
use crate::types::scoring::{DimensionCard, IndexCard, QuizResult};
use thiserror::Error;

pub use archetype::Archetype;
pub use dimension::{DimensionScores, ResolvedDimensions};
pub use indices::{CompositeIndices, Index};
pub use insights::{generate_insights, Insight};

pub const DEFAULT_RESPONDENT: &str = "Beautiful Soul";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("score not computable: no scoreable answers for {}", join_codes(.missing))]
    NotComputable { missing: Vec<Dimension> },
}

fn join_codes(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|dimension| dimension.code())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Name used when the intake name question is unanswered.
    pub respondent_fallback: String,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            respondent_fallback: DEFAULT_RESPONDENT.to_string(),
        }
    }
}

/// Rounds halves towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `round((BMH + RCI + RS) / 3)`, kept within 0..=100.
pub fn energy_alignment_score(indices: &CompositeIndices, readiness: f64) -> u8 {
    let mean = (indices.bmh + indices.rci + readiness) / 3.0;
    round_half_up(mean).clamp(0.0, 100.0) as u8
}

pub fn evaluate(answers: &Answers, options: &ScoringOptions) -> Result<QuizResult, ScoringError> {
    let dimensions = DimensionScores::compute(answers).resolve()?;
    let indices = CompositeIndices::new(&dimensions);
    let eas = energy_alignment_score(&indices, dimensions.rs);
    let archetype = Archetype::classify(eas);
    tracing::debug!(?indices, eas, archetype = archetype.name, "scored answers");

    let respondent = answers
        .get(RESPONDENT_QUESTION)
        .map(str::trim)
        .map(str::to_string)
        .unwrap_or_else(|| options.respondent_fallback.clone());

    Ok(QuizResult {
        respondent,
        dimensions: DimensionCard::new(&dimensions),
        indices: IndexCard::new(&indices),
        eas,
        archetype: *archetype,
        insights: generate_insights(&dimensions, &indices, archetype),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::archetype::ArchetypeKind;
    use crate::scoring::insights::InsightKind;

    fn resolved_indices(bmh: f64, rci: f64) -> CompositeIndices {
        CompositeIndices { ogi: 0.0, rci, bmh }
    }

    #[test]
    fn eas_is_the_rounded_mean_of_bmh_rci_and_readiness() {
        let eas = energy_alignment_score(&resolved_indices(60.0, 40.0), 50.0);
        assert_eq!(eas, 50);
        assert_eq!(Archetype::classify(eas).kind, ArchetypeKind::Awakening);

        assert_eq!(energy_alignment_score(&resolved_indices(100.0, 100.0), 100.0), 100);
        assert_eq!(energy_alignment_score(&resolved_indices(0.0, 0.0), 0.0), 0);
        assert_eq!(energy_alignment_score(&resolved_indices(40.5, 40.0), 41.0), 41);
    }

    #[test]
    fn neutral_answers_with_poor_sleep_land_in_resting_phase() {
        // Every scale item 3 -> 50; first option of each choice question.
        let answers = fixtures::uniform(3, 0);
        let result = evaluate(&answers, &ScoringOptions::default()).expect("complete answers");

        // BD: four scale items at 50, sleep <5h = 100, movement almost-never = 100
        assert_eq!(result.dimensions.bd, 67);
        assert_eq!(result.dimensions.ro, 50);
        assert_eq!(result.dimensions.rs, 13);
        assert_eq!(result.indices.ogi, 50);
        assert_eq!(result.indices.rci, 50);
        assert_eq!(result.indices.bmh, 44);
        assert_eq!(result.eas, 36);
        assert_eq!(result.archetype.kind, ArchetypeKind::Resting);
        assert_eq!(result.respondent, "Asha");
    }

    #[test]
    fn thriving_profile_reaches_radiant_phase() {
        let mut answers = fixtures::uniform(1, 99);
        for id in ["S3Q1", "S3Q6", "S4Q5", "S6Q4"] {
            answers.insert(id, if id == "S6Q4" { "1" } else { "5" });
        }
        for id in ["S5Q1", "S5Q2", "S5Q3", "S5Q4", "S5Q5", "S5Q6", "S6Q1", "S6Q2", "S6Q3", "S6Q5"] {
            answers.insert(id, "5");
        }

        let result = evaluate(&answers, &ScoringOptions::default()).expect("complete answers");
        assert_eq!(result.dimensions.ro, 0);
        assert_eq!(result.dimensions.bb, 0);
        assert_eq!(result.dimensions.sp, 100);
        assert_eq!(result.dimensions.ss, 100);
        assert_eq!(result.dimensions.rs, 100);
        assert_eq!(result.archetype.kind, ArchetypeKind::Radiant);
        assert_eq!(result.insights.len(), 5);
        assert_eq!(result.insights[4].kind, InsightKind::Readiness);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let answers = fixtures::uniform(4, 1);
        let options = ScoringOptions::default();
        let first = evaluate(&answers, &options).expect("complete answers");
        let second = evaluate(&answers, &options).expect("complete answers");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_section_propagates_not_computable() {
        let mut answers = fixtures::uniform(3, 0);
        for n in 1..=6 {
            answers.insert(format!("S5Q{n}"), "");
        }

        let error = evaluate(&answers, &ScoringOptions::default()).expect_err("SP is unscoreable");
        assert_eq!(
            error,
            ScoringError::NotComputable {
                missing: vec![Dimension::Sp]
            }
        );
        assert!(error.to_string().contains("SP"));
    }

    #[test]
    fn one_answer_keeps_a_dimension_computable() {
        let mut answers = fixtures::uniform(3, 0);
        for n in 2..=6 {
            answers.insert(format!("S1Q{n}"), "");
        }
        let result = evaluate(&answers, &ScoringOptions::default()).expect("RO still scoreable");
        assert_eq!(result.dimensions.ro, 50);
    }

    #[test]
    fn missing_readiness_still_scores() {
        let mut answers = fixtures::uniform(3, 0);
        answers.insert("S7Q1", "");
        answers.insert("S7Q3", "");
        let result = evaluate(&answers, &ScoringOptions::default()).expect("RS defaults to 0");
        assert_eq!(result.dimensions.rs, 0);
    }

    #[test]
    fn respondent_falls_back_when_name_missing() {
        let mut answers = fixtures::uniform(3, 0);
        answers.insert("S0Q1", "  ");
        let options = ScoringOptions {
            respondent_fallback: "Friend".to_string(),
        };
        let result = evaluate(&answers, &options).expect("complete answers");
        assert_eq!(result.respondent, "Friend");
    }
}
