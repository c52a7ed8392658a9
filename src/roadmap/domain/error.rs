//! Error types for roadmap domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing roadmap values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The status string does not name a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTodoStatusError),
}

/// Error returned while parsing task statuses from forms or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTodoStatusError(pub String);
