//! Repository port for catalogue persistence.

use crate::portfolio::domain::{CatalogEntry, Certificate, EntryId, EntryKind, Project, Skill};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalogue repository operations.
pub type CatalogRepositoryResult<T> = Result<T, CatalogRepositoryError>;

/// Persistence contract for one catalogue entry type.
#[async_trait]
pub trait CatalogRepository<E: CatalogEntry>: Send + Sync {
    /// Stores a new entry and returns it with its assigned identifier.
    async fn insert(&self, draft: E::Draft) -> CatalogRepositoryResult<E>;

    /// Stores every draft in one unit of work, assigning identifiers in
    /// input order. Either every entry is stored or none is.
    async fn insert_all(&self, drafts: Vec<E::Draft>) -> CatalogRepositoryResult<Vec<E>>;

    /// Persists every field of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::NotFound`] when the entry does not
    /// exist.
    async fn update(&self, entry: &E) -> CatalogRepositoryResult<()>;

    /// Removes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::NotFound`] when the entry does not
    /// exist.
    async fn delete(&self, id: EntryId) -> CatalogRepositoryResult<()>;

    /// Finds an entry by identifier.
    ///
    /// Returns `None` when the entry does not exist.
    async fn find_by_id(&self, id: EntryId) -> CatalogRepositoryResult<Option<E>>;

    /// Returns every entry in ascending identifier order.
    async fn list(&self) -> CatalogRepositoryResult<Vec<E>>;

    /// Returns the number of stored entries.
    async fn count(&self) -> CatalogRepositoryResult<usize>;
}

/// A store holding all three catalogue entry types.
#[async_trait]
pub trait PortfolioRepository:
    CatalogRepository<Project> + CatalogRepository<Certificate> + CatalogRepository<Skill>
{
    /// Removes every entry of every kind in one unit of work and returns
    /// how many were removed.
    async fn clear_catalogue(&self) -> CatalogRepositoryResult<usize>;
}

/// Errors returned by catalogue repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogRepositoryError {
    /// The entry was not found.
    #[error("{kind} entry not found: {id}")]
    NotFound {
        /// Kind of entry that was addressed.
        kind: EntryKind,
        /// Missing identifier.
        id: EntryId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a not-found error for an entry type.
    #[must_use]
    pub const fn not_found<E: CatalogEntry>(id: EntryId) -> Self {
        Self::NotFound { kind: E::KIND, id }
    }
}
