//! Error types for Prepcoach.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session {0} already has an answer for every question")]
    AllQuestionsAnswered(String),

    #[error("Store document is corrupt: {0}")]
    StoreCorrupt(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
