//! Given steps for roadmap BDD scenarios.

use super::world::{RoadmapWorld, run_async};
use eyre::WrapErr;
use folio::roadmap::services::CreateTodoRequest;
use rstest_bdd_macros::given;

#[given(r#"a pending task "{description}""#)]
fn pending_task(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let todo = run_async(world.service.create(CreateTodoRequest::new(description.clone())))
        .wrap_err("create pending task")?;
    world.tasks.insert(description, todo.id());
    Ok(())
}

#[given(r#"task "{description}" has been activated"#)]
fn task_activated(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    run_async(world.service.activate(id)).wrap_err("activate task")?;
    Ok(())
}

#[given(r#"task "{description}" has been paused"#)]
fn task_paused(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    run_async(world.service.pause(id)).wrap_err("pause task")?;
    Ok(())
}
