//! Manager aggregate mediating task allocation to its team.

use super::{
    AllocationError, AllocationOutcome, ManagerId, Mechanic, MechanicId, ReallocationPolicy,
    StaffProfile, StaffRole, WorkforceError,
};
use crate::task::domain::{Task, TaskId};

/// Manager aggregate.
///
/// Owns a team of mechanics and a list of tasks waiting to be allocated.
#[derive(Debug, Clone)]
pub struct Manager {
    id: ManagerId,
    profile: StaffProfile,
    team: Vec<MechanicId>,
    pending: Vec<TaskId>,
}

impl Manager {
    /// Creates a manager with an empty team.
    #[must_use]
    pub fn new(id: ManagerId, profile: StaffProfile) -> Self {
        Self {
            id,
            profile,
            team: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Returns the manager identifier.
    #[must_use]
    pub const fn id(&self) -> ManagerId {
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
        StaffRole::Manager
    }

    /// Returns whether the manager may perform `action`. Always `true`.
    #[must_use]
    pub fn has_permission(&self, action: &str) -> bool {
        self.role().has_permission(action)
    }

    /// Returns the team members in the order they joined.
    #[must_use]
    pub fn team(&self) -> &[MechanicId] {
        &self.team
    }

    /// Returns whether the mechanic is on this manager's team.
    #[must_use]
    pub fn is_team_member(&self, mechanic_id: MechanicId) -> bool {
        self.team.contains(&mechanic_id)
    }

    /// Adds a mechanic to the team; repeated adds are ignored.
    ///
    /// Returns `true` when the mechanic joined.
    pub fn add_team_member(&mut self, mechanic_id: MechanicId) -> bool {
        if self.is_team_member(mechanic_id) {
            return false;
        }
        self.team.push(mechanic_id);
        true
    }

    /// Returns the tasks waiting for allocation.
    #[must_use]
    pub fn pending(&self) -> &[TaskId] {
        &self.pending
    }

    /// Files a task as waiting for allocation; repeated adds are ignored.
    pub fn add_pending(&mut self, task_id: TaskId) {
        if !self.pending.contains(&task_id) {
            self.pending.push(task_id);
        }
    }

    /// Allocates a task to a mechanic on this manager's team.
    ///
    /// On success the task is assigned to the mechanic, records the
    /// mechanic as its owner, and leaves the pending list if it was there.
    /// When the outcome is [`AllocationOutcome::Reassigned`] the caller must
    /// release the task from the previous mechanic, which only the workshop
    /// service can reach; see `WorkshopService::allocate_task`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::NotOnTeam`] when the mechanic is not a team
    /// member and [`AllocationError::AlreadyAllocated`] when the task already
    /// has a mechanic under [`ReallocationPolicy::Reject`]. Nothing is
    /// mutated on error.
    pub(crate) fn allocate(
        &mut self,
        task: &mut Task,
        mechanic: &mut Mechanic,
        policy: ReallocationPolicy,
    ) -> Result<AllocationOutcome, WorkforceError> {
        if !self.is_team_member(mechanic.id()) {
            return Err(AllocationError::NotOnTeam {
                manager_id: self.id,
                mechanic_id: mechanic.id(),
            }
            .into());
        }

        let outcome = match (task.assigned_mechanic(), policy) {
            (None, _) => AllocationOutcome::Allocated,
            (Some(current), ReallocationPolicy::Reject) => {
                return Err(AllocationError::AlreadyAllocated {
                    task_id: task.id(),
                    mechanic_id: current,
                }
                .into());
            }
            (Some(_), ReallocationPolicy::Ignore) => return Ok(AllocationOutcome::Unchanged),
            (Some(current), ReallocationPolicy::Reassign) if current == mechanic.id() => {
                AllocationOutcome::Unchanged
            }
            (Some(current), ReallocationPolicy::Reassign) => {
                AllocationOutcome::Reassigned { previous: current }
            }
        };

        mechanic.assign(task);
        task.assign_mechanic(mechanic.id());
        self.pending.retain(|id| *id != task.id());
        Ok(outcome)
    }
}
