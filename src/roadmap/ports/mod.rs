//! Port contracts for the task roadmap.
//!
//! Ports define infrastructure-agnostic interfaces used by the roadmap
//! service.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoTransaction};
