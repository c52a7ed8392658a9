//! Catalogue management for projects, certificates and skills.

use crate::portfolio::{
    domain::{
        CatalogEntry, EntryId, EntryKind, PortfolioDomainError, Project, Skill,
        SkillGroup, group_by_category,
    },
    ports::{CatalogRepository, CatalogRepositoryError, PortfolioRepository},
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Headline counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    /// Number of projects.
    pub project_count: usize,
    /// Number of skills.
    pub skill_count: usize,
}

/// Service-level errors for catalogue operations.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PortfolioDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CatalogRepositoryError),
}

impl PortfolioError {
    /// Returns the addressed kind and identifier when the entry is missing.
    #[must_use]
    pub const fn not_found(&self) -> Option<(EntryKind, EntryId)> {
        match self {
            Self::Repository(CatalogRepositoryError::NotFound { kind, id }) => Some((*kind, *id)),
            _ => None,
        }
    }
}

/// Result type for catalogue service operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Catalogue service over a portfolio repository.
pub struct PortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for PortfolioService<R>
where
    R: PortfolioRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> PortfolioService<R>
where
    R: PortfolioRepository,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new entry built from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn add<E>(&self, draft: E::Draft) -> PortfolioResult<E>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        let entry = CatalogRepository::<E>::insert(self.repository.as_ref(), draft).await?;
        info!(kind = %E::KIND, id = %entry.id(), "catalogue entry added");
        Ok(entry)
    }

    /// Stores every draft in one unit of work, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails; nothing
    /// is stored in that case.
    pub async fn add_all<E>(&self, drafts: Vec<E::Draft>) -> PortfolioResult<Vec<E>>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        let entries = CatalogRepository::<E>::insert_all(self.repository.as_ref(), drafts).await?;
        info!(kind = %E::KIND, count = entries.len(), "catalogue entries added");
        Ok(entries)
    }

    /// Replaces every field of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error when the entry does not exist.
    pub async fn edit<E>(&self, id: EntryId, draft: E::Draft) -> PortfolioResult<E>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        let mut entry = self
            .find::<E>(id)
            .await?
            .ok_or_else(|| CatalogRepositoryError::not_found::<E>(id))?;
        entry.apply(draft);
        CatalogRepository::<E>::update(self.repository.as_ref(), &entry).await?;
        info!(kind = %E::KIND, %id, "catalogue entry updated");
        Ok(entry)
    }

    /// Removes an entry.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error when the entry does not exist.
    pub async fn delete<E>(&self, id: EntryId) -> PortfolioResult<()>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        CatalogRepository::<E>::delete(self.repository.as_ref(), id).await?;
        info!(kind = %E::KIND, %id, "catalogue entry deleted");
        Ok(())
    }

    /// Finds an entry by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn find<E>(&self, id: EntryId) -> PortfolioResult<Option<E>>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        Ok(CatalogRepository::<E>::find_by_id(self.repository.as_ref(), id).await?)
    }

    /// Lists every entry of one kind in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn list<E>(&self) -> PortfolioResult<Vec<E>>
    where
        E: CatalogEntry,
        R: CatalogRepository<E>,
    {
        Ok(CatalogRepository::<E>::list(self.repository.as_ref()).await?)
    }

    /// Lists skills grouped by category.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn skill_groups(&self) -> PortfolioResult<Vec<SkillGroup>> {
        Ok(group_by_category(self.list::<Skill>().await?))
    }

    /// Counts projects and skills.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn stats(&self) -> PortfolioResult<PortfolioStats> {
        let repository = self.repository.as_ref();
        Ok(PortfolioStats {
            project_count: CatalogRepository::<Project>::count(repository).await?,
            skill_count: CatalogRepository::<Skill>::count(repository).await?,
        })
    }

    /// Removes every catalogue entry and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Repository`] when persistence fails.
    pub async fn clear(&self) -> PortfolioResult<usize> {
        let removed = self.repository.clear_catalogue().await?;
        info!(removed, "catalogue cleared");
        Ok(removed)
    }
}
