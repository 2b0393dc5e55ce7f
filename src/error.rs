use crate::scoring::ScoringError;
use crate::session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("answers file not found: {0}")]
    AnswersNotFound(String),

    #[error("unsupported answers format (expected .json or .toml): {0}")]
    UnsupportedAnswerFormat(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("input closed before the quiz was complete")]
    InputClosed,

    #[error("strict scoring refused: {0} answer issue(s) found")]
    StrictValidation(usize),

    #[error("logging setup failed: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
