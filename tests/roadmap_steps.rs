//! Behaviour tests for the single-active-task roadmap.

#[path = "roadmap_steps/mod.rs"]
mod roadmap_steps_defs;

use roadmap_steps_defs::world::{RoadmapWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Completing the active task promotes the oldest pending task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn completing_promotes_oldest_pending(world: RoadmapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Activating a task demotes the paused focus"
)]
#[tokio::test(flavor = "multi_thread")]
async fn activating_demotes_paused_focus(world: RoadmapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Deleting the active task leaves nothing active"
)]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_active_leaves_nothing_active(world: RoadmapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Completing the last task leaves nothing active"
)]
#[tokio::test(flavor = "multi_thread")]
async fn completing_last_task_leaves_nothing_active(world: RoadmapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Activating a missing task fails"
)]
#[tokio::test(flavor = "multi_thread")]
async fn activating_missing_task_fails(world: RoadmapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/roadmap.feature",
    name = "Seeding three tasks activates the first"
)]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_activates_first(world: RoadmapWorld) {
    let _ = world;
}
