//! Policy applied when a task that already has a mechanic is allocated again.

use serde::{Deserialize, Serialize};

/// Re-allocation policy for tasks that already have a mechanic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReallocationPolicy {
    /// Refuse with [`super::AllocationError::AlreadyAllocated`].
    #[default]
    Reject,
    /// Leave the existing allocation in place and report success.
    Ignore,
    /// Move the task from its current mechanic to the requested one.
    Reassign,
}

/// Effect of a successful allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The task had no mechanic and is now allocated.
    Allocated,
    /// The task moved away from `previous`, which must release it.
    Reassigned {
        /// Mechanic that held the task before.
        previous: super::MechanicId,
    },
    /// The policy left the existing allocation untouched.
    Unchanged,
}
