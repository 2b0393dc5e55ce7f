use crate::catalog::{Dimension, Polarity};
use crate::scoring::{round_half_up, Archetype, CompositeIndices, Index, Insight, ResolvedDimensions};
use serde::Serialize;

/// Rounded dimension scores, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionCard {
    #[serde(rename = "RO")]
    pub ro: u8,
    #[serde(rename = "EO")]
    pub eo: u8,
    #[serde(rename = "BD")]
    pub bd: u8,
    #[serde(rename = "BB")]
    pub bb: u8,
    #[serde(rename = "SP")]
    pub sp: u8,
    #[serde(rename = "SS")]
    pub ss: u8,
    #[serde(rename = "RS")]
    pub rs: u8,
}

pub(crate) fn to_percent(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 100.0) as u8
}

impl DimensionCard {
    pub fn new(dimensions: &ResolvedDimensions) -> Self {
        Self {
            ro: to_percent(dimensions.ro),
            eo: to_percent(dimensions.eo),
            bd: to_percent(dimensions.bd),
            bb: to_percent(dimensions.bb),
            sp: to_percent(dimensions.sp),
            ss: to_percent(dimensions.ss),
            rs: to_percent(dimensions.rs),
        }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
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

/// Rounded composite indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexCard {
    #[serde(rename = "OGI")]
    pub ogi: i32,
    #[serde(rename = "RCI")]
    pub rci: i32,
    #[serde(rename = "BMH")]
    pub bmh: i32,
}

impl IndexCard {
    pub fn new(indices: &CompositeIndices) -> Self {
        Self {
            ogi: round_half_up(indices.ogi) as i32,
            rci: round_half_up(indices.rci) as i32,
            bmh: round_half_up(indices.bmh) as i32,
        }
    }

    pub fn get(&self, index: Index) -> i32 {
        match index {
            Index::Ogi => self.ogi,
            Index::Rci => self.rci,
            Index::Bmh => self.bmh,
        }
    }
}

/// Coarse reading of a displayed metric, accounting for its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Healthy,
    Moderate,
    Concerning,
}

impl Standing {
    pub fn assess(value: i32, polarity: Polarity) -> Self {
        match (polarity, value) {
            (Polarity::LowerIsBetter, v) if v > 60 => Standing::Concerning,
            (Polarity::LowerIsBetter, v) if v > 30 => Standing::Moderate,
            (Polarity::LowerIsBetter, _) => Standing::Healthy,
            (Polarity::HigherIsBetter, v) if v > 60 => Standing::Healthy,
            (Polarity::HigherIsBetter, v) if v > 30 => Standing::Moderate,
            (Polarity::HigherIsBetter, _) => Standing::Concerning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Standing::Healthy => "healthy",
            Standing::Moderate => "moderate",
            Standing::Concerning => "concerning",
        }
    }
}

/// Everything a presentation layer needs. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub respondent: String,
    pub dimensions: DimensionCard,
    pub indices: IndexCard,
    pub eas: u8,
    pub archetype: Archetype,
    pub insights: Vec<Insight>,
}
