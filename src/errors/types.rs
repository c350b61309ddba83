use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
