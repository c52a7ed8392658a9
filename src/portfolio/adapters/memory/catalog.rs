//! In-memory catalogue repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::portfolio::{
    domain::{CatalogEntry, Certificate, EntryId, Project, Skill},
    ports::{
        CatalogRepository, CatalogRepositoryError, CatalogRepositoryResult, PortfolioRepository,
    },
};

/// Entries of one kind plus the last identifier handed out.
#[derive(Debug, Clone)]
pub struct CatalogTable<E> {
    rows: BTreeMap<EntryId, E>,
    last_id: i64,
}

impl<E: CatalogEntry> CatalogTable<E> {
    fn push(&mut self, draft: E::Draft) -> E {
        self.last_id += 1;
        let entry = E::from_draft(EntryId::new(self.last_id), draft);
        self.rows.insert(entry.id(), entry.clone());
        entry
    }

    fn clear(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        removed
    }
}

impl<E> Default for CatalogTable<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// The three catalogue tables held by [`InMemoryPortfolioRepository`].
#[derive(Debug, Default)]
pub struct PortfolioTables {
    projects: CatalogTable<Project>,
    certificates: CatalogTable<Certificate>,
    skills: CatalogTable<Skill>,
}

/// Selects the in-memory table that stores entries of this type.
pub trait MemoryTable: CatalogEntry {
    /// Returns the table for this entry type.
    fn table(tables: &PortfolioTables) -> &CatalogTable<Self>;

    /// Returns the table for this entry type, mutably.
    fn table_mut(tables: &mut PortfolioTables) -> &mut CatalogTable<Self>;
}

impl MemoryTable for Project {
    fn table(tables: &PortfolioTables) -> &CatalogTable<Self> {
        &tables.projects
    }

    fn table_mut(tables: &mut PortfolioTables) -> &mut CatalogTable<Self> {
        &mut tables.projects
    }
}

impl MemoryTable for Certificate {
    fn table(tables: &PortfolioTables) -> &CatalogTable<Self> {
        &tables.certificates
    }

    fn table_mut(tables: &mut PortfolioTables) -> &mut CatalogTable<Self> {
        &mut tables.certificates
    }
}

impl MemoryTable for Skill {
    fn table(tables: &PortfolioTables) -> &CatalogTable<Self> {
        &tables.skills
    }

    fn table_mut(tables: &mut PortfolioTables) -> &mut CatalogTable<Self> {
        &mut tables.skills
    }
}

/// Thread-safe in-memory catalogue repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioRepository {
    state: Arc<RwLock<PortfolioTables>>,
}

impl InMemoryPortfolioRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> CatalogRepositoryError {
    CatalogRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<E: MemoryTable> CatalogRepository<E> for InMemoryPortfolioRepository {
    async fn insert(&self, draft: E::Draft) -> CatalogRepositoryResult<E> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(E::table_mut(&mut state).push(draft))
    }

    async fn insert_all(&self, drafts: Vec<E::Draft>) -> CatalogRepositoryResult<Vec<E>> {
        let mut state = self.state.write().map_err(lock_error)?;
        let table = E::table_mut(&mut state);
        Ok(drafts.into_iter().map(|draft| table.push(draft)).collect())
    }

    async fn update(&self, entry: &E) -> CatalogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = E::table_mut(&mut state)
            .rows
            .get_mut(&entry.id())
            .ok_or_else(|| CatalogRepositoryError::not_found::<E>(entry.id()))?;
        *slot = entry.clone();
        Ok(())
    }

    async fn delete(&self, id: EntryId) -> CatalogRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        E::table_mut(&mut state)
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CatalogRepositoryError::not_found::<E>(id))
    }

    async fn find_by_id(&self, id: EntryId) -> CatalogRepositoryResult<Option<E>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(E::table(&state).rows.get(&id).cloned())
    }

    async fn list(&self) -> CatalogRepositoryResult<Vec<E>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(E::table(&state).rows.values().cloned().collect())
    }

    async fn count(&self) -> CatalogRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(E::table(&state).rows.len())
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn clear_catalogue(&self) -> CatalogRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.projects.clear() + state.certificates.clear() + state.skills.clear())
    }
}
