use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or saving the record store. All of them abort the run.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} does not contain a JSON array of objects")]
    NotAnArray { path: PathBuf },
    #[error("record #{index} in {path} has no string `name`")]
    MissingName { path: PathBuf, index: usize },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-document failure. The pipeline logs it and moves on to the next file.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
