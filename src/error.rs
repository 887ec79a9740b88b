use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiError {
    #[error("Cannot read corpus '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Export Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation Error: {0}")]
    Validation(String),
}

pub type LxResult<T> = Result<T, LexiError>;
