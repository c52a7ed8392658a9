//! When steps for roadmap BDD scenarios.

use super::world::{RoadmapWorld, run_async};
use eyre::WrapErr;
use folio::roadmap::{domain::TodoId, services::SeedTodo};
use rstest_bdd_macros::when;

#[when(r#"task "{description}" is activated"#)]
fn activate_task(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    world.last_result = Some(run_async(world.service.activate(id)));
    Ok(())
}

#[when("task number {id:i64} is activated")]
fn activate_task_by_number(world: &mut RoadmapWorld, id: i64) {
    world.last_result = Some(run_async(world.service.activate(TodoId::new(id))));
}

#[when(r#"task "{description}" is completed"#)]
fn complete_task(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    let (done, _) = run_async(world.service.complete(id)).wrap_err("complete task")?;
    world.last_result = Some(Ok(done));
    Ok(())
}

#[when(r#"task "{description}" is deleted"#)]
fn delete_task(world: &mut RoadmapWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&description)?;
    run_async(world.service.delete(id)).wrap_err("delete task")?;
    Ok(())
}

#[when(r#"the roadmap is seeded with "{first}", "{second}" and "{third}""#)]
fn seed_roadmap(
    world: &mut RoadmapWorld,
    first: String,
    second: String,
    third: String,
) -> Result<(), eyre::Report> {
    let entries = [first, second, third]
        .into_iter()
        .map(|description| SeedTodo::new(description, "General"))
        .collect();
    let seeded = run_async(world.service.seed(entries)).wrap_err("seed roadmap")?;
    for todo in seeded {
        world.tasks.insert(todo.description().to_owned(), todo.id());
    }
    Ok(())
}
