//! Mechanic aggregate owning an assignment list and its work queue.

use super::{MechanicId, StaffProfile, StaffRole, TaskQueue, WorkforceError};
use crate::task::domain::{Task, TaskId};
use mockable::Clock;

/// Mechanic aggregate.
///
/// The assignment list (insertion order) and the work queue (priority order)
/// always hold the same set of tasks. There is no cap on concurrent
/// assignments.
#[derive(Debug, Clone)]
pub struct Mechanic {
    id: MechanicId,
    profile: StaffProfile,
    assignments: Vec<TaskId>,
    queue: TaskQueue,
}

impl Mechanic {
    /// Creates a mechanic with no assignments.
    #[must_use]
    pub fn new(id: MechanicId, profile: StaffProfile) -> Self {
        Self {
            id,
            profile,
            assignments: Vec::new(),
            queue: TaskQueue::new(),
        }
    }

    /// Returns the mechanic identifier.
    #[must_use]
    pub const fn id(&self) -> MechanicId {
        self.id
    }

    /// Returns the staff profile.
    #[must_use]
    pub const fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    /// Returns the staff role.
    #[must_use]
    pub const fn role(&self) -> StaffRole {
        StaffRole::Mechanic
    }

    /// Returns whether the mechanic may perform `action`.
    #[must_use]
    pub fn has_permission(&self, action: &str) -> bool {
        self.role().has_permission(action)
    }

    /// Returns the assigned tasks in assignment order.
    #[must_use]
    pub fn assignments(&self) -> &[TaskId] {
        &self.assignments
    }

    /// Returns the assigned tasks, most urgent first.
    #[must_use]
    pub fn queued_in_order(&self) -> Vec<TaskId> {
        self.queue.in_order()
    }

    /// Returns whether the task is assigned to this mechanic.
    #[must_use]
    pub fn holds(&self, task_id: TaskId) -> bool {
        self.assignments.contains(&task_id)
    }

    /// Assigns a task, appending it to the list and inserting it into the
    /// queue.
    ///
    /// Assigning a task the mechanic already holds changes nothing. Returns
    /// `true` when the task was newly assigned.
    pub fn assign(&mut self, task: &Task) -> bool {
        if self.holds(task.id()) {
            return false;
        }
        self.assignments.push(task.id());
        self.queue.push(task.id(), task.priority());
        true
    }

    /// Returns the most urgent assigned task without removing it.
    #[must_use]
    pub fn next_task(&self) -> Option<TaskId> {
        self.queue.peek()
    }

    /// Completes an assigned task and drops it from the list and the queue.
    ///
    /// # Errors
    ///
    /// Returns [`WorkforceError::InvalidTask`] when the task is not assigned
    /// to this mechanic; nothing is mutated in that case.
    pub fn complete(&mut self, task: &mut Task, clock: &impl Clock) -> Result<(), WorkforceError> {
        if !self.holds(task.id()) {
            return Err(WorkforceError::InvalidTask {
                mechanic_id: self.id,
                task_id: task.id(),
            });
        }
        task.complete(clock);
        self.release(task.id());
        Ok(())
    }

    /// Drops a task from the list and the queue without completing it.
    ///
    /// Returns `true` when the task was assigned.
    pub fn release(&mut self, task_id: TaskId) -> bool {
        let position = self.assignments.iter().position(|id| *id == task_id);
        if let Some(index) = position {
            self.assignments.remove(index);
            self.queue.remove(task_id);
        }
        position.is_some()
    }
}
