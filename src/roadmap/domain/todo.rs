//! Task aggregate and the payloads used to create and edit it.

use super::{TodoDomainError, TodoId, TodoStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Category assigned when a task is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Validated, trimmed task description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyDescription`] when the value is blank
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn normalize_category(category: Option<String>) -> String {
    category
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned())
}

/// Insert payload for a task that has not been stored yet.
///
/// The store assigns the identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    description: TodoDescription,
    category: String,
    status: TodoStatus,
    created_at: DateTime<Utc>,
}

impl NewTodo {
    /// Creates a `Pending` task stamped with the current clock time.
    #[must_use]
    pub fn pending(
        description: TodoDescription,
        category: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            description,
            category: normalize_category(category),
            status: TodoStatus::Pending,
            created_at: clock.utc(),
        }
    }

    /// Overrides the initial status. Only bulk seeding may do this.
    #[must_use]
    pub(crate) fn with_status(mut self, status: TodoStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TodoDescription {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Builds the stored task once the store has assigned an identifier.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            description: self.description.into_inner(),
            category: self.category,
            status: self.status,
            created_at: self.created_at,
            completed_at: None,
        }
    }
}

/// Field values written by the administrative override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEdit {
    description: TodoDescription,
    category: String,
    status: TodoStatus,
}

impl TodoEdit {
    /// Creates an override payload.
    #[must_use]
    pub fn new(description: TodoDescription, category: Option<String>, status: TodoStatus) -> Self {
        Self {
            description,
            category: normalize_category(category),
            status,
        }
    }

    /// Parses an override payload from raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError`] when the description is blank or the
    /// status is unknown.
    pub fn parse(
        description: impl Into<String>,
        category: Option<String>,
        status: &str,
    ) -> Result<Self, TodoDomainError> {
        let description = TodoDescription::new(description)?;
        let status = TodoStatus::try_from(status)?;
        Ok(Self::new(description, category, status))
    }

    /// Returns the status the override writes.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }
}

/// Roadmap task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    description: String,
    category: String,
    status: TodoStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted task identifier.
    pub id: TodoId,
    /// Persisted description.
    pub description: String,
    /// Persisted category.
    pub category: String,
    /// Persisted lifecycle status.
    pub status: TodoStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            category: data.category,
            status: data.status,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, set the first time the task is
    /// completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Moves the task to `status` without touching timestamps.
    pub(crate) fn set_status(&mut self, status: TodoStatus) {
        self.status = status;
    }

    /// Marks the task `Done`.
    ///
    /// `completed_at` is only written when it is still unset.
    pub(crate) fn mark_done(&mut self, now: DateTime<Utc>) {
        self.status = TodoStatus::Done;
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    /// Overwrites description, category and status with no transition
    /// checks.
    pub(crate) fn apply_override(&mut self, edit: TodoEdit) {
        self.description = edit.description.into_inner();
        self.category = edit.category;
        self.status = edit.status;
    }
}
