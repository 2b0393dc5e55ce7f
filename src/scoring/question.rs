use crate::catalog::{Question, QuestionKind};

/// Agreement scale 1..=5 mapped onto 0..=100.
const SCALE_POINTS: [u8; 5] = [0, 25, 50, 75, 100];

/// Scores one answer. `None` means the answer contributes nothing to any
/// aggregate; a categorical answer that matches no option scores `0`.
pub fn score_question(question: &Question, raw: Option<&str>) -> Option<u8> {
    let raw = raw?;
    match question.kind {
        QuestionKind::Text { .. } | QuestionKind::Single { .. } => None,
        QuestionKind::Scale { reverse } => {
            let mapped = scale_points(raw)?;
            Some(if reverse { 100 - mapped } else { mapped })
        }
        QuestionKind::Categorical { options } => {
            match options.iter().find(|option| option.value == raw) {
                Some(option) => Some(option.score.unwrap_or(0)),
                None => {
                    tracing::warn!(
                        question = question.id,
                        value = raw,
                        "unknown categorical answer scored as 0"
                    );
                    Some(0)
                }
            }
        }
    }
}

fn scale_points(raw: &str) -> Option<u8> {
    match raw.trim().parse::<usize>() {
        Ok(value @ 1..=5) => Some(SCALE_POINTS[value - 1]),
        _ => None,
    }
}
