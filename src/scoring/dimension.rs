use super::question::score_question;
use super::ScoringError;
use crate::answers::Answers;
use crate::catalog::{self, Dimension, Section, READINESS_QUESTIONS};

/// Unrounded mean of the scoreable answers in `section`, or `None` when the
/// section has no scoreable answer.
pub fn dimension_score(section: &Section, answers: &Answers) -> Option<f64> {
    let scores: Vec<f64> = section
        .questions
        .iter()
        .filter(|question| question.scored)
        .filter_map(|question| score_question(question, answers.get(question.id)))
        .map(f64::from)
        .collect();

    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Mean of the two readiness questions. Unanswered questions count as 0, so
/// readiness always resolves.
pub fn readiness_score(answers: &Answers) -> f64 {
    let total: f64 = READINESS_QUESTIONS
        .iter()
        .map(|id| {
            catalog::question_by_id(id)
                .and_then(|question| score_question(question, answers.get(id)))
                .map(f64::from)
                .unwrap_or(0.0)
        })
        .sum();
    total / READINESS_QUESTIONS.len() as f64
}

/// Section means as computed, before any completeness check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScores {
    pub ro: Option<f64>,
    pub eo: Option<f64>,
    pub bd: Option<f64>,
    pub bb: Option<f64>,
    pub sp: Option<f64>,
    pub ss: Option<f64>,
    pub rs: f64,
}

impl DimensionScores {
    pub fn compute(answers: &Answers) -> Self {
        let mean = |dimension| {
            catalog::section_by_dimension(dimension)
                .and_then(|section| dimension_score(section, answers))
        };
        let scores = Self {
            ro: mean(Dimension::Ro),
            eo: mean(Dimension::Eo),
            bd: mean(Dimension::Bd),
            bb: mean(Dimension::Bb),
            sp: mean(Dimension::Sp),
            ss: mean(Dimension::Ss),
            rs: readiness_score(answers),
        };
        tracing::debug!(?scores, "dimension scores");
        scores
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Ro => self.ro,
            Dimension::Eo => self.eo,
            Dimension::Bd => self.bd,
            Dimension::Bb => self.bb,
            Dimension::Sp => self.sp,
            Dimension::Ss => self.ss,
            Dimension::Rs => Some(self.rs),
        }
    }

    /// Dimensions whose section had no scoreable answer.
    pub fn missing(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| self.get(*dimension).is_none())
            .collect()
    }

    pub fn resolve(&self) -> Result<ResolvedDimensions, ScoringError> {
        match (self.ro, self.eo, self.bd, self.bb, self.sp, self.ss) {
            (Some(ro), Some(eo), Some(bd), Some(bb), Some(sp), Some(ss)) => {
                Ok(ResolvedDimensions {
                    ro,
                    eo,
                    bd,
                    bb,
                    sp,
                    ss,
                    rs: self.rs,
                })
            }
            _ => Err(ScoringError::NotComputable {
                missing: self.missing(),
            }),
        }
    }
}

/// Every dimension present; the input to indices and insights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDimensions {
    pub ro: f64,
    pub eo: f64,
    pub bd: f64,
    pub bb: f64,
    pub sp: f64,
    pub ss: f64,
    pub rs: f64,
}

impl ResolvedDimensions {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Ro => self.ro,
            Dimension::Eo => self.eo,
            Dimension::Bd => self.bd,
            Dimension::Bb => self.bb,
            Dimension::Sp => self.sp,
            Dimension::Ss => self.ss,
            Dimension::Rs => self.rs,
        }
    }
}
