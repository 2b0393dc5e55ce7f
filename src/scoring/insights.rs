use super::archetype::Archetype;
use super::dimension::ResolvedDimensions;
use super::indices::{CompositeIndices, Index};
use super::round_half_up;
use crate::catalog::Dimension;
use serde::Serialize;

const STRENGTH_THRESHOLD: f64 = 50.0;
const HARMONY_THRESHOLD: f64 = 50.0;
const READINESS_THRESHOLD: f64 = 66.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Archetype,
    HighestBurden,
    TopStrength,
    BodyMindHarmony,
    Readiness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub icon: &'static str,
    pub text: String,
}

/// Highest value among `candidates`; ties go to the earliest candidate.
fn leading(dimensions: &ResolvedDimensions, candidates: &[Dimension]) -> Option<(Dimension, f64)> {
    candidates
        .iter()
        .fold(None, |best, &dimension| {
            let value = dimensions.get(dimension);
            match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((dimension, value)),
            }
        })
}

fn percent(value: f64) -> i64 {
    round_half_up(value) as i64
}

pub fn generate_insights(
    dimensions: &ResolvedDimensions,
    indices: &CompositeIndices,
    archetype: &Archetype,
) -> Vec<Insight> {
    let mut insights = vec![Insight {
        kind: InsightKind::Archetype,
        icon: archetype.icon,
        text: format!("As someone in {}, {}", archetype.name, archetype.insight),
    }];

    if let Some((dimension, value)) = leading(dimensions, &Dimension::BURDENS) {
        insights.push(Insight {
            kind: InsightKind::HighestBurden,
            icon: dimension.icon(),
            text: format!(
                "Your highest energy drain is in {} ({}%). This is where focused healing will have the greatest impact.",
                dimension.name(),
                percent(value)
            ),
        });
    }

    if let Some((dimension, value)) = leading(dimensions, &Dimension::STRENGTHS) {
        if value >= STRENGTH_THRESHOLD {
            insights.push(Insight {
                kind: InsightKind::TopStrength,
                icon: dimension.icon(),
                text: format!(
                    "Your strength lies in {} ({}%). This is a foundation you can build upon.",
                    dimension.name(),
                    percent(value)
                ),
            });
        }
    }

    let harmony = if indices.bmh < HARMONY_THRESHOLD {
        "suggests a disconnect between your physical and emotional well-being. Prioritizing self-care routines will help restore balance."
    } else {
        "shows promising alignment between your physical and emotional states. Continue nurturing this connection."
    };
    insights.push(Insight {
        kind: InsightKind::BodyMindHarmony,
        icon: Index::Bmh.icon(),
        text: format!(
            "Your {} score ({}%) {}",
            Index::Bmh.name(),
            percent(indices.bmh),
            harmony
        ),
    });

    if dimensions.rs >= READINESS_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Readiness,
            icon: Dimension::Rs.icon(),
            text: format!(
                "Your {} ({}%) shows you're committed to change. This is the perfect time to take action!",
                Dimension::Rs.name(),
                percent(dimensions.rs)
            ),
        });
    }

    insights
}
