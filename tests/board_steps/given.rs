//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, run_async, scenario_deadline, start_board};
use eyre::WrapErr;
use kanban::board::projection::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given("a started board")]
fn a_started_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = run_async(start_board()).wrap_err("start board for scenario")?;
    world.board = Some(board);
    Ok(())
}

#[given(r#"a task named "{name}""#)]
fn a_task_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(name.as_str(), "Scenario task", scenario_deadline()?);
    let created = run_async(world.board()?.tasks().create_task(request))
        .wrap_err("create task for scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a favourite task named "{name}""#)]
fn a_favourite_task_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(name.as_str(), "Scenario task", scenario_deadline()?);
    let tasks = world.board()?.tasks();
    let created =
        run_async(tasks.create_task(request)).wrap_err("create task for scenario")?;
    let favourite = run_async(tasks.update_task_favourite(created.id, true))
        .wrap_err("mark scenario task as favourite")?;
    world.last_task = Some(favourite);
    Ok(())
}
