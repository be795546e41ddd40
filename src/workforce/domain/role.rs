//! Staff roles and the capability check consulted by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix granting mechanics every task-scoped action.
const TASK_ACTION_PREFIX: &str = "TASK_";

/// Non-task action mechanics may perform.
const VIEW_VEHICLE_ACTION: &str = "VIEW_VEHICLE";

/// Role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Allocates work and manages the team; holds every permission.
    Manager,
    /// Works through allocated tasks.
    Mechanic,
}

impl StaffRole {
    /// Returns whether the role may perform `action`.
    ///
    /// Managers may perform any action. Mechanics may perform actions
    /// prefixed `TASK_` and `VIEW_VEHICLE`. The check is advisory: the
    /// scheduling operations themselves do not consult it.
    #[must_use]
    pub fn has_permission(self, action: &str) -> bool {
        match self {
            Self::Manager => true,
            Self::Mechanic => {
                action.starts_with(TASK_ACTION_PREFIX) || action == VIEW_VEHICLE_ACTION
            }
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Mechanic => "mechanic",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
