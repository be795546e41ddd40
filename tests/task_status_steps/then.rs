//! Then steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use garage::task::domain::TaskState;
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskState::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;

    if task.state() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.status(),
            task.state().status()
        ));
    }
    Ok(())
}

#[then("the task has a completion time")]
fn has_completion_time(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    if world.task()?.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion time"));
    }
    Ok(())
}

#[then("the task has no completion time")]
fn has_no_completion_time(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    if let Some(completed_at) = world.task()?.completed_at() {
        return Err(eyre::eyre!("expected no completion time, found {completed_at}"));
    }
    Ok(())
}
