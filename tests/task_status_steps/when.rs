//! When steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the task is advanced")]
fn task_advanced(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world
        .service
        .advance_task(task_id)
        .wrap_err("advance task")?;
    Ok(())
}

#[when("the task is reverted")]
fn task_reverted(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.service.revert_task(task_id).wrap_err("revert task")?;
    Ok(())
}

#[when("the task is reset to waiting")]
fn task_reset(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world
        .service
        .reset_task_to_waiting(task_id)
        .wrap_err("reset task")?;
    Ok(())
}
