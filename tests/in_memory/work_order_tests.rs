//! In-memory integration tests for the work-order lifecycle.

use super::helpers::{Workshop, workshop};
use eyre::{Result, ensure, eyre};
use garage::notification::domain::NotificationKind;
use garage::task::domain::TaskState;
use garage::workforce::domain::{AllocationError, WorkforceError};
use garage::workshop::services::{CreateTaskRequest, StaffRequest, WorkshopError};
use rstest::rstest;

#[rstest]
fn completed_work_order_notifies_owner_exactly_once(mut workshop: Workshop) -> Result<()> {
    let task_id = workshop.service.create_task(
        CreateTaskRequest::new("Replace front brake pads", 2, workshop.vehicle)
            .with_manager(workshop.manager),
    )?;
    workshop
        .service
        .allocate_task(workshop.manager, task_id, workshop.mechanic)?;
    let next = workshop.service.next_task(workshop.mechanic)?;
    ensure!(next == Some(task_id), "mechanic should see the task next");

    let report = workshop
        .service
        .complete_assigned_task(workshop.mechanic, task_id)?;

    let delivered = workshop.sender.delivered_to(workshop.customer);
    ensure!(delivered.len() == 1, "expected one notification, got {}", delivered.len());
    let delivery = delivered
        .first()
        .ok_or_else(|| eyre!("missing delivery"))?;
    ensure!(delivery.kind == NotificationKind::TaskComplete, "wrong kind");
    ensure!(delivery.recipient.as_str() == "alex@example.com", "wrong recipient");

    let task = workshop
        .service
        .store()
        .task(task_id)
        .ok_or_else(|| eyre!("task should exist"))?;
    ensure!(task.state() == TaskState::Completed, "task should be completed");
    ensure!(
        task.completed_at() == Some(report.completed_at),
        "completion timestamp should be recorded"
    );
    Ok(())
}

#[rstest]
fn allocation_outside_team_changes_nothing(mut workshop: Workshop) -> Result<()> {
    let outsider = workshop.service.hire_mechanic(StaffRequest::new(
        "Kim Laine",
        "kim@garage.test",
        "torque",
    ))?;
    let task_id = workshop
        .service
        .create_task(CreateTaskRequest::new("Wheel alignment", 1, workshop.vehicle))?;

    let result = workshop
        .service
        .allocate_task(workshop.manager, task_id, outsider);

    ensure!(
        matches!(
            result,
            Err(WorkshopError::Workforce(WorkforceError::TaskAllocation(
                AllocationError::NotOnTeam { .. }
            )))
        ),
        "expected a not-on-team refusal, got {result:?}"
    );
    ensure!(
        workshop.service.mechanic_queue(outsider)?.is_empty(),
        "outsider queue should stay empty"
    );
    let unallocated: Vec<_> = workshop
        .service
        .unallocated_tasks()
        .into_iter()
        .map(|task| task.id())
        .collect();
    ensure!(unallocated == vec![task_id], "task should remain unallocated");
    Ok(())
}

#[rstest]
fn mechanic_works_through_queue_by_priority(mut workshop: Workshop) -> Result<()> {
    let mut raised = Vec::new();
    for (description, priority) in [("Wipers", 3), ("Engine", 1), ("Lights", 2)] {
        let task_id = workshop
            .service
            .create_task(CreateTaskRequest::new(description, priority, workshop.vehicle))?;
        workshop
            .service
            .allocate_task(workshop.manager, task_id, workshop.mechanic)?;
        raised.push(task_id);
    }

    let mut order = Vec::new();
    while let Some(task_id) = workshop.service.next_task(workshop.mechanic)? {
        workshop
            .service
            .complete_assigned_task(workshop.mechanic, task_id)?;
        order.push(task_id);
    }

    let expected: Vec<_> = [0_usize, 2, 1]
        .iter()
        .filter_map(|index| raised.get(*index).copied())
        .collect();
    ensure!(order == expected, "expected {expected:?}, got {order:?}");
    ensure!(
        workshop.sender.delivered().len() == 3,
        "every completion should notify the owner"
    );
    Ok(())
}

#[rstest]
fn completion_timestamp_tracks_completed_state(mut workshop: Workshop) -> Result<()> {
    let task_id = workshop
        .service
        .create_task(CreateTaskRequest::new("Diagnostics", 1, workshop.vehicle))?;

    let mut observed = Vec::new();
    for _ in 0..3 {
        workshop.service.advance_task(task_id)?;
        let task = workshop
            .service
            .store()
            .task(task_id)
            .ok_or_else(|| eyre!("task should exist"))?;
        observed.push((task.state(), task.completed_at().is_some()));
    }
    workshop.service.revert_task(task_id)?;
    let reverted = workshop
        .service
        .store()
        .task(task_id)
        .ok_or_else(|| eyre!("task should exist"))?;

    ensure!(
        observed
            == vec![
                (TaskState::InProgress, false),
                (TaskState::Completed, true),
                (TaskState::Completed, true),
            ],
        "unexpected progression {observed:?}"
    );
    ensure!(reverted.completed_at().is_none(), "revert should clear timestamp");
    Ok(())
}
