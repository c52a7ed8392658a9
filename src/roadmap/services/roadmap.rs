//! Roadmap state machine.
//!
//! Every operation runs inside one repository unit of work and re-reads the
//! tasks it needs before deciding a transition. Operations that go through
//! this service keep at most one task `Active`; the administrative override
//! is the single exception and is named accordingly.

use crate::roadmap::{
    domain::{NewTodo, Todo, TodoDescription, TodoDomainError, TodoEdit, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoTransaction},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Number of completed tasks shown on the dashboard.
pub const RECENTLY_DONE_LIMIT: usize = 10;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    description: String,
    category: Option<String>,
}

impl CreateTodoRequest {
    /// Creates a request with the required description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// One entry of a bulk seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTodo {
    /// Task description.
    pub description: String,
    /// Optional category label.
    #[serde(default)]
    pub category: Option<String>,
}

impl SeedTodo {
    /// Creates a seed entry.
    #[must_use]
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: Some(category.into()),
        }
    }
}

/// Dashboard view of the roadmap, partitioned by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoadmapDashboard {
    /// Active tasks, ascending by id.
    pub active: Vec<Todo>,
    /// Pending tasks, ascending by id.
    pub pending: Vec<Todo>,
    /// Paused tasks, ascending by id.
    pub paused: Vec<Todo>,
    /// Most recently completed tasks, newest first.
    pub recently_done: Vec<Todo>,
}

/// Service-level errors for roadmap operations.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

impl RoadmapError {
    /// Returns the missing identifier when the operation addressed a task
    /// that does not exist.
    #[must_use]
    pub const fn not_found(&self) -> Option<TodoId> {
        match self {
            Self::Repository(TodoRepositoryError::NotFound(id)) => Some(*id),
            _ => None,
        }
    }

    /// Returns `true` when the operation addressed a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.not_found().is_some()
    }
}

/// Result type for roadmap service operations.
pub type RoadmapResult<T> = Result<T, RoadmapError>;

/// Roadmap state machine over a task repository.
pub struct RoadmapService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for RoadmapService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> RoadmapService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new roadmap service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a `Pending` task.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Domain`] when the description is blank, or
    /// [`RoadmapError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTodoRequest) -> RoadmapResult<Todo> {
        let description = TodoDescription::new(request.description)?;
        let draft = NewTodo::pending(description, request.category, &*self.clock);
        let todo = self.repository.transaction(move |tx| tx.insert(draft)).await?;
        info!(todo_id = %todo.id(), category = todo.category(), "created roadmap task");
        Ok(todo)
    }

    /// Makes `id` the active task, demoting any other `Active` or `Paused`
    /// task to `Pending`.
    ///
    /// Activating the task that is already active changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error.
    pub async fn activate(&self, id: TodoId) -> RoadmapResult<Todo> {
        let todo = self
            .repository
            .transaction(move |tx| activate_within(tx, id))
            .await?;
        info!(todo_id = %id, "activated roadmap task");
        Ok(todo)
    }

    /// Pauses `id` regardless of its current status. Other tasks are not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error.
    pub async fn pause(&self, id: TodoId) -> RoadmapResult<Todo> {
        let todo = self
            .repository
            .transaction(move |tx| {
                let mut todo = require(tx, id)?;
                todo.set_status(TodoStatus::Paused);
                tx.update(&todo)?;
                Ok(todo)
            })
            .await?;
        info!(todo_id = %id, "paused roadmap task");
        Ok(todo)
    }

    /// Completes `id` and advances the roadmap.
    ///
    /// The completion time is recorded only once. The lowest-id `Pending`
    /// task is then activated, even when `id` was already `Done`; when none
    /// is pending, the roadmap is left with no active task. Returns the
    /// completed task together with the task that was advanced to, if any.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error. On error nothing is committed.
    pub async fn complete(&self, id: TodoId) -> RoadmapResult<(Todo, Option<Todo>)> {
        let now = self.clock.utc();
        let (completed, advanced) = self
            .repository
            .transaction(move |tx| {
                let mut todo = require(tx, id)?;
                todo.mark_done(now);
                tx.update(&todo)?;
                let advanced = match tx.oldest_with_status(TodoStatus::Pending)? {
                    Some(next) => Some(activate_within(tx, next.id())?),
                    None => None,
                };
                Ok((todo, advanced))
            })
            .await?;
        match &advanced {
            Some(next) => info!(todo_id = %id, next_id = %next.id(), "completed roadmap task"),
            None => info!(todo_id = %id, "completed roadmap task, nothing pending"),
        }
        Ok((completed, advanced))
    }

    /// Deletes `id` permanently. No other task is activated in its place.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error.
    pub async fn delete(&self, id: TodoId) -> RoadmapResult<()> {
        self.repository.transaction(move |tx| tx.delete(id)).await?;
        info!(todo_id = %id, "deleted roadmap task");
        Ok(())
    }

    /// Administrative override: overwrites description, category and
    /// status with no transition checks.
    ///
    /// This path can leave more than one task `Active`. It exists for
    /// manual correction; callers own the invariant when they use it.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error.
    pub async fn override_todo(&self, id: TodoId, edit: TodoEdit) -> RoadmapResult<Todo> {
        let status = edit.status();
        let todo = self
            .repository
            .transaction(move |tx| {
                let mut todo = require(tx, id)?;
                todo.apply_override(edit);
                tx.update(&todo)?;
                Ok(todo)
            })
            .await?;
        info!(todo_id = %id, %status, "overrode roadmap task fields");
        Ok(todo)
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`RoadmapError::Repository`] when the task does
    /// not exist, or a persistence error.
    pub async fn find(&self, id: TodoId) -> RoadmapResult<Todo> {
        Ok(self.repository.transaction(move |tx| require(tx, id)).await?)
    }

    /// Reads the dashboard lists in one consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Repository`] when persistence fails.
    pub async fn dashboard(&self) -> RoadmapResult<RoadmapDashboard> {
        let dashboard = self
            .repository
            .transaction(|tx| {
                Ok(RoadmapDashboard {
                    active: tx.list_by_status(TodoStatus::Active)?,
                    pending: tx.list_by_status(TodoStatus::Pending)?,
                    paused: tx.list_by_status(TodoStatus::Paused)?,
                    recently_done: tx.recently_completed(RECENTLY_DONE_LIMIT)?,
                })
            })
            .await?;
        debug!(
            active = dashboard.active.len(),
            pending = dashboard.pending.len(),
            paused = dashboard.paused.len(),
            "loaded roadmap dashboard"
        );
        Ok(dashboard)
    }

    /// Bulk-seeds the roadmap in input order.
    ///
    /// The first entry is created `Active`, the rest `Pending`. Any task
    /// already holding the active or paused slot is demoted first, so the
    /// seed never leaves two tasks `Active`. All entries are validated
    /// before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Domain`] when any description is blank, or a
    /// persistence error. On error nothing is committed.
    pub async fn seed(&self, entries: Vec<SeedTodo>) -> RoadmapResult<Vec<Todo>> {
        let drafts = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<NewTodo, TodoDomainError> {
                let description = TodoDescription::new(entry.description)?;
                let status = if index == 0 {
                    TodoStatus::Active
                } else {
                    TodoStatus::Pending
                };
                Ok(NewTodo::pending(description, entry.category, &*self.clock).with_status(status))
            })
            .collect::<Result<Vec<_>, TodoDomainError>>()?;
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let seeded = self
            .repository
            .transaction(move |tx| {
                demote_focus_holders(tx, None)?;
                drafts
                    .into_iter()
                    .map(|draft| tx.insert(draft))
                    .collect::<TodoRepositoryResult<Vec<Todo>>>()
            })
            .await?;
        info!(count = seeded.len(), "seeded roadmap");
        Ok(seeded)
    }

    /// Removes every task. Used by the seed command's reset mode.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Repository`] when persistence fails.
    pub async fn clear(&self) -> RoadmapResult<usize> {
        let removed = self.repository.transaction(|tx| tx.delete_all()).await?;
        info!(removed, "cleared roadmap");
        Ok(removed)
    }
}

fn require(tx: &mut dyn TodoTransaction, id: TodoId) -> TodoRepositoryResult<Todo> {
    tx.find_by_id(id)?.ok_or(TodoRepositoryError::NotFound(id))
}

/// Promotes `id` to `Active` and demotes every other focus holder.
fn activate_within(tx: &mut dyn TodoTransaction, id: TodoId) -> TodoRepositoryResult<Todo> {
    let mut todo = require(tx, id)?;
    demote_focus_holders(tx, Some(id))?;
    if todo.status() != TodoStatus::Active {
        todo.set_status(TodoStatus::Active);
        tx.update(&todo)?;
    }
    Ok(todo)
}

fn demote_focus_holders(
    tx: &mut dyn TodoTransaction,
    keep: Option<TodoId>,
) -> TodoRepositoryResult<()> {
    for status in TodoStatus::ALL.into_iter().filter(|status| status.holds_focus()) {
        for mut other in tx.list_by_status(status)? {
            if Some(other.id()) == keep {
                continue;
            }
            other.set_status(TodoStatus::Pending);
            tx.update(&other)?;
            debug!(todo_id = %other.id(), from = %status, "demoted roadmap task to pending");
        }
    }
    Ok(())
}
