//! When steps for work-order BDD scenarios.

use super::world::WorkOrderWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the manager allocates "{task}" to "{mechanic}""#)]
fn manager_allocates(
    world: &mut WorkOrderWorld,
    task: String,
    mechanic: String,
) -> Result<(), eyre::Report> {
    let manager = world
        .manager
        .ok_or_else(|| eyre::eyre!("missing manager in scenario world"))?;
    let task_id = world.task(&task)?;
    let mechanic_id = world.mechanic(&mechanic)?;
    let result = world.service.allocate_task(manager, task_id, mechanic_id);
    world.last_allocation = Some(result);
    Ok(())
}

#[when(r#""{mechanic}" completes their next task"#)]
fn mechanic_completes_next(world: &mut WorkOrderWorld, mechanic: String) -> Result<(), eyre::Report> {
    let mechanic_id = world.mechanic(&mechanic)?;
    let task_id = world
        .service
        .next_task(mechanic_id)?
        .ok_or_else(|| eyre::eyre!("{mechanic} has no queued task"))?;
    world
        .service
        .complete_assigned_task(mechanic_id, task_id)
        .wrap_err("complete task in scenario")?;
    Ok(())
}
