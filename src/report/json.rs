use crate::catalog;
use crate::types::report::QuizReport;

pub fn to_json(report: &QuizReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn catalog_to_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog::all_sections())
}
