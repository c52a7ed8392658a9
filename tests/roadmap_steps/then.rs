//! Then steps for roadmap BDD scenarios.

use super::world::{RoadmapWorld, run_async};
use eyre::WrapErr;
use folio::roadmap::domain::TodoStatus;
use rstest_bdd_macros::then;

#[then(r#"task "{description}" is "{status}""#)]
fn task_has_status(
    world: &RoadmapWorld,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TodoStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.task_id(&description)?;
    let todo = run_async(world.service.find(id)).wrap_err("find task")?;

    if todo.status() != expected {
        return Err(eyre::eyre!(
            "expected {description:?} to be {expected}, found {}",
            todo.status()
        ));
    }
    Ok(())
}

#[then("the number of active tasks is {count:usize}")]
fn active_task_count(world: &RoadmapWorld, count: usize) -> Result<(), eyre::Report> {
    let dashboard = run_async(world.service.dashboard()).wrap_err("load dashboard")?;
    if dashboard.active.len() != count {
        return Err(eyre::eyre!(
            "expected {count} active tasks, found {}",
            dashboard.active.len()
        ));
    }
    Ok(())
}

#[then("the operation fails because the task does not exist")]
fn operation_not_found(world: &RoadmapWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected a not-found error, got {other:?}")),
    }
}
