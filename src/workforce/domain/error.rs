//! Error types for staff, allocation, and work-queue operations.

use super::{ManagerId, MechanicId};
use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned by mechanic and manager operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkforceError {
    /// The task reference is unknown or not held by the mechanic.
    #[error("invalid task {task_id} for mechanic {mechanic_id}")]
    InvalidTask {
        /// Mechanic that was addressed.
        mechanic_id: MechanicId,
        /// Task that was referenced.
        task_id: TaskId,
    },

    /// A manager refused to allocate a task.
    #[error("task allocation failed: {0}")]
    TaskAllocation(#[from] AllocationError),

    /// The staff member's name is empty after trimming.
    #[error("staff name must not be empty")]
    EmptyName,
}

/// Reasons a manager refuses an allocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// The task does not exist.
    #[error("unknown task {0}")]
    UnknownTask(TaskId),

    /// The mechanic does not exist.
    #[error("unknown mechanic {0}")]
    UnknownMechanic(MechanicId),

    /// The mechanic is not on the manager's team.
    #[error("mechanic {mechanic_id} is not on the team of manager {manager_id}")]
    NotOnTeam {
        /// Manager performing the allocation.
        manager_id: ManagerId,
        /// Mechanic outside the team.
        mechanic_id: MechanicId,
    },

    /// The task is already allocated and the policy rejects re-allocation.
    #[error("task {task_id} is already allocated to mechanic {mechanic_id}")]
    AlreadyAllocated {
        /// Task being allocated.
        task_id: TaskId,
        /// Mechanic currently holding the task.
        mechanic_id: MechanicId,
    },
}
