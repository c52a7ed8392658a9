//! Shared state for admin handlers.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;

use super::session::{AdminPassword, SessionStore};
use super::views::Views;
use crate::data_dir::DataDir;
use crate::portfolio::{
    adapters::{memory::InMemoryPortfolioRepository, postgres::PostgresPortfolioRepository},
    ports::PortfolioRepository,
    services::PortfolioService,
};
use crate::roadmap::{
    adapters::{memory::InMemoryTodoRepository, postgres::PostgresTodoRepository},
    ports::TodoRepository,
    services::RoadmapService,
};

/// Selects the repositories and clock the admin surface runs on.
pub trait Backend: Send + Sync + 'static {
    /// Roadmap task store.
    type Todos: TodoRepository + 'static;
    /// Catalogue store.
    type Catalog: PortfolioRepository + 'static;
    /// Time source for task timestamps.
    type Clock: Clock + Send + Sync + 'static;
}

/// Process-local stores; nothing survives a restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryBackend;

impl Backend for InMemoryBackend {
    type Todos = InMemoryTodoRepository;
    type Catalog = InMemoryPortfolioRepository;
    type Clock = DefaultClock;
}

/// `PostgreSQL` stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresBackend;

impl Backend for PostgresBackend {
    type Todos = PostgresTodoRepository;
    type Catalog = PostgresPortfolioRepository;
    type Clock = DefaultClock;
}

/// Admin settings taken from configuration.
#[derive(Debug, Clone)]
pub struct AdminSettings {
    /// Admin password digest.
    pub password: AdminPassword,
    /// Directory holding the resume.
    pub data_dir: DataDir,
    /// Resume file name inside `data_dir`.
    pub resume_file: String,
}

/// State shared by every admin handler.
pub struct AdminState<B: Backend> {
    pub(crate) roadmap: RoadmapService<B::Todos, B::Clock>,
    pub(crate) portfolio: PortfolioService<B::Catalog>,
    pub(crate) sessions: SessionStore,
    pub(crate) views: Arc<Views>,
    pub(crate) settings: Arc<AdminSettings>,
}

impl<B: Backend> Clone for AdminState<B> {
    fn clone(&self) -> Self {
        Self {
            roadmap: self.roadmap.clone(),
            portfolio: self.portfolio.clone(),
            sessions: self.sessions.clone(),
            views: Arc::clone(&self.views),
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<B: Backend> AdminState<B> {
    /// Assembles handler state from its services.
    #[must_use]
    pub fn new(
        roadmap: RoadmapService<B::Todos, B::Clock>,
        portfolio: PortfolioService<B::Catalog>,
        views: Views,
        settings: AdminSettings,
    ) -> Self {
        Self {
            roadmap,
            portfolio,
            sessions: SessionStore::new(),
            views: Arc::new(views),
            settings: Arc::new(settings),
        }
    }

    /// Returns the roadmap service.
    #[must_use]
    pub const fn roadmap(&self) -> &RoadmapService<B::Todos, B::Clock> {
        &self.roadmap
    }

    /// Returns the catalogue service.
    #[must_use]
    pub const fn portfolio(&self) -> &PortfolioService<B::Catalog> {
        &self.portfolio
    }

    /// Returns the session table.
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
