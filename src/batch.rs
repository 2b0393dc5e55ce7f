use crate::answers::{is_answer_file, load_answers};
use crate::error::QuizError;
use crate::scoring::{evaluate, ScoringOptions};
use crate::types::scoring::QuizResult;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `.json`/`.toml` file under `root`, sorted by path.
pub fn list_answer_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_answer_file(path))
        .collect();
    files.sort();
    files
}

/// Control characters in free text would split a summary row.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Result<QuizResult, QuizError>,
}

impl BatchEntry {
    pub fn summary_line(&self, root: &Path) -> String {
        let name = self.path.strip_prefix(root).unwrap_or(&self.path).display();
        match &self.outcome {
            Ok(result) => format!(
                "{name}\t{}\t{}\t{}",
                result.eas,
                result.archetype.name,
                single_line(&result.respondent)
            ),
            Err(e) => format!("{name}\terror: {e}"),
        }
    }
}

/// Scores each answer file independently; one failure never stops the rest.
pub fn score_dir(root: &Path, options: &ScoringOptions) -> Vec<BatchEntry> {
    list_answer_files(root)
        .into_iter()
        .map(|path| {
            let outcome = load_answers(&path)
                .and_then(|answers| evaluate(&answers, options).map_err(QuizError::from));
            if let Err(e) = &outcome {
                tracing::warn!(path = %path.display(), error = %e, "answers file not scored");
            }
            BatchEntry { path, outcome }
        })
        .collect()
}
