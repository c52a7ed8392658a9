//! Shared world state for roadmap BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use folio::roadmap::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId},
    services::{RoadmapError, RoadmapService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRoadmapService = RoadmapService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for roadmap behaviour tests.
pub struct RoadmapWorld {
    pub service: TestRoadmapService,
    pub tasks: HashMap<String, TodoId>,
    pub last_result: Option<Result<Todo, RoadmapError>>,
}

impl RoadmapWorld {
    /// Creates a world with an empty roadmap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: RoadmapService::new(
                Arc::new(InMemoryTodoRepository::new()),
                Arc::new(DefaultClock),
            ),
            tasks: HashMap::new(),
            last_result: None,
        }
    }

    /// Looks up a task created earlier in the scenario.
    pub fn task_id(&self, description: &str) -> Result<TodoId, eyre::Report> {
        self.tasks
            .get(description)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task named {description:?} in scenario world"))
    }
}

impl Default for RoadmapWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RoadmapWorld {
    RoadmapWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
