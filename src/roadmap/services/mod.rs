//! Application services for the task roadmap.

mod roadmap;

pub use roadmap::{
    CreateTodoRequest, RECENTLY_DONE_LIMIT, RoadmapDashboard, RoadmapError, RoadmapResult,
    RoadmapService, SeedTodo,
};
