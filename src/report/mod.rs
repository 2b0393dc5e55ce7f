pub mod json;
pub mod md;

use crate::error::QuizError;
use crate::types::report::QuizReport;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &QuizReport, format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_catalog(format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::catalog_to_json().map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::catalog_to_markdown()),
    }
}
