use super::task::TaskId;
use thiserror::Error;

/// Failures surfaced by the task store and its callers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error("Not authorized to access task {0}")]
    Forbidden(TaskId),

    #[error("{0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
