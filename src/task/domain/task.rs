//! Task aggregate root.

use super::{Priority, TaskId, TaskState};
use crate::customer::domain::VehicleId;
use crate::workforce::domain::MechanicId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Task aggregate root.
///
/// The completion timestamp is present exactly when the state is
/// [`TaskState::Completed`]; every state change goes through
/// [`Task::apply_state`] to keep the two in step. Deserialization goes
/// through [`Task::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    description: String,
    priority: Priority,
    vehicle_id: VehicleId,
    state: TaskState,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    assigned_mechanic: Option<MechanicId>,
}

/// Parameter object for reconstructing a stored task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Stored work description.
    pub description: String,
    /// Stored priority.
    pub priority: Priority,
    /// Vehicle the work is raised against.
    pub vehicle_id: VehicleId,
    /// Stored lifecycle state.
    pub state: TaskState,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Mechanic the task was allocated to, if any.
    #[serde(default)]
    pub assigned_mechanic: Option<MechanicId>,
}

impl From<PersistedTaskData> for Task {
    fn from(data: PersistedTaskData) -> Self {
        Self::from_persisted(data)
    }
}

impl Task {
    /// Creates a waiting task for the given vehicle.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        priority: Priority,
        vehicle_id: VehicleId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            vehicle_id,
            state: TaskState::Waiting,
            created_at: clock.utc(),
            completed_at: None,
            assigned_mechanic: None,
        }
    }

    /// Reconstructs a task from stored data.
    ///
    /// A completion timestamp that disagrees with the stored state is
    /// dropped, or filled from `created_at` for a completed task.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let completed_at = if data.state.is_completed() {
            Some(data.completed_at.unwrap_or(data.created_at))
        } else {
            None
        };
        Self {
            id: data.id,
            description: data.description,
            priority: data.priority,
            vehicle_id: data.vehicle_id,
            state: data.state,
            created_at: data.created_at,
            completed_at,
            assigned_mechanic: data.assigned_mechanic,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the work description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the vehicle the task was raised against.
    #[must_use]
    pub const fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if the task is completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the mechanic this task was allocated to, if any.
    #[must_use]
    pub const fn assigned_mechanic(&self) -> Option<MechanicId> {
        self.assigned_mechanic
    }

    /// Records the mechanic the task has been allocated to.
    pub const fn assign_mechanic(&mut self, mechanic_id: MechanicId) {
        self.assigned_mechanic = Some(mechanic_id);
    }

    /// Moves the task one step forward through the state machine.
    ///
    /// A completed task stays completed.
    pub fn advance(&mut self, clock: &impl Clock) {
        self.apply_state(self.state.next(), clock);
    }

    /// Moves the task one step backward through the state machine.
    ///
    /// A waiting task stays waiting.
    pub fn revert(&mut self, clock: &impl Clock) {
        self.apply_state(self.state.prev(), clock);
    }

    /// Overrides the state directly, bypassing the transition table.
    pub fn set_state(&mut self, state: TaskState, clock: &impl Clock) {
        self.apply_state(state, clock);
    }

    /// Marks the task as completed.
    ///
    /// The completion timestamp is overwritten on every call, including
    /// calls on an already completed task. The state is driven forward
    /// through the transition table until it reaches
    /// [`TaskState::Completed`].
    pub fn complete(&mut self, clock: &impl Clock) {
        self.completed_at = Some(clock.utc());
        while !self.state.is_completed() {
            self.state = self.state.next();
        }
    }

    /// Orders tasks for a work queue: the larger priority value sorts first.
    #[must_use]
    pub fn queue_order(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }

    fn apply_state(&mut self, state: TaskState, clock: &impl Clock) {
        if state.is_completed() {
            if self.completed_at.is_none() {
                self.completed_at = Some(clock.utc());
            }
        } else {
            self.completed_at = None;
        }
        self.state = state;
    }
}
