use super::dimension::ResolvedDimensions;
use crate::catalog::Polarity;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Index {
    #[serde(rename = "OGI")]
    Ogi,
    #[serde(rename = "RCI")]
    Rci,
    #[serde(rename = "BMH")]
    Bmh,
}

impl Index {
    pub const ALL: [Index; 3] = [Index::Ogi, Index::Rci, Index::Bmh];

    pub fn code(self) -> &'static str {
        match self {
            Index::Ogi => "OGI",
            Index::Rci => "RCI",
            Index::Bmh => "BMH",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Index::Ogi => "Overwhelm & Guilt Index",
            Index::Rci => "Resilience & Connection Index",
            Index::Bmh => "Body-Mind Harmony",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Index::Ogi => "📊",
            Index::Rci => "💪",
            Index::Bmh => "🧘",
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Index::Ogi => Polarity::LowerIsBetter,
            Index::Rci | Index::Bmh => Polarity::HigherIsBetter,
        }
    }
}

/// Unrounded composite indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeIndices {
    /// Overwhelm & guilt; lower is better.
    pub ogi: f64,
    /// Resilience & connection; higher is better.
    pub rci: f64,
    /// Body-mind harmony; higher is better.
    pub bmh: f64,
}

impl CompositeIndices {
    pub fn new(dimensions: &ResolvedDimensions) -> Self {
        let ResolvedDimensions {
            ro,
            eo,
            bd,
            bb,
            sp,
            ss,
            ..
        } = *dimensions;

        Self {
            ogi: 0.40 * ro + 0.30 * eo + 0.30 * bb,
            rci: ((100.0 - bb) + sp + ss) / 3.0,
            bmh: ((100.0 - bd) + (100.0 - eo) + (100.0 - ro)) / 3.0,
        }
    }
}
