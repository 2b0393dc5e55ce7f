use crate::report::OutputFormat;
use crate::scoring::{ScoringOptions, DEFAULT_RESPONDENT};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub report: ReportConfig,
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: OutputFormat,
    pub respondent_fallback: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Md,
            respondent_fallback: DEFAULT_RESPONDENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Refuse to score answer sets that fail validation.
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl QuizConfig {
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            respondent_fallback: self.report.respondent_fallback.clone(),
        }
    }
}
