//! Error types for portfolio domain validation.

use thiserror::Error;

/// Errors returned while constructing catalogue entries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortfolioDomainError {
    /// A required field is empty after trimming.
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

/// Error returned while parsing an entry kind from a route segment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown catalogue kind: {0}")]
pub struct ParseEntryKindError(pub String);
