//! Repository port for roadmap persistence.
//!
//! Every roadmap operation runs as one unit of work: the service hands a
//! closure to [`TodoRepository::transaction`] and the adapter either commits
//! everything the closure wrote or nothing at all.

use crate::roadmap::domain::{NewTodo, Todo, TodoId, TodoStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for roadmap repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Reads and writes available inside a unit of work.
///
/// Scans return tasks in ascending identifier order unless stated
/// otherwise.
pub trait TodoTransaction {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    fn find_by_id(&mut self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// Identifiers increase monotonically and are never reused.
    fn insert(&mut self, todo: NewTodo) -> TodoRepositoryResult<Todo>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the task does not
    /// exist.
    fn update(&mut self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the task does not
    /// exist.
    fn delete(&mut self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Returns every task with the given status.
    fn list_by_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns the lowest-id task with the given status.
    fn oldest_with_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns up to `limit` `Done` tasks, most recently completed first.
    ///
    /// Tasks without a completion time sort last; ties fall back to
    /// descending identifier.
    fn recently_completed(&mut self, limit: usize) -> TodoRepositoryResult<Vec<Todo>>;

    /// Removes every task and returns how many were removed.
    ///
    /// The identifier sequence is not reset.
    fn delete_all(&mut self) -> TodoRepositoryResult<usize>;
}

/// Roadmap persistence contract.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Runs `work` as a single atomic unit of work.
    ///
    /// Changes made by `work` are committed only when it returns `Ok`;
    /// otherwise every change is rolled back and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or
    /// [`TodoRepositoryError::Persistence`] when the store cannot begin or
    /// commit the unit of work.
    async fn transaction<T, F>(&self, work: F) -> TodoRepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TodoTransaction) -> TodoRepositoryResult<T> + Send + 'static;
}

/// Errors returned by roadmap repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
