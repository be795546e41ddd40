//! Task status state machine.
//!
//! The transition table is:
//!
//! | State        | `next`         | `prev`       |
//! |--------------|----------------|--------------|
//! | `Waiting`    | `InProgress`   | `Waiting`    |
//! | `InProgress` | `Completed`    | `Waiting`    |
//! | `Completed`  | `Completed`    | `InProgress` |
//!
//! Moving past either end of the table leaves the state unchanged.

use super::ParseTaskStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is queued and work has not started.
    #[default]
    Waiting,
    /// A mechanic is working on the task.
    InProgress,
    /// Work on the task has finished.
    Completed,
}

impl TaskState {
    /// Every state, in forward order.
    pub const ALL: [Self; 3] = [Self::Waiting, Self::InProgress, Self::Completed];

    /// Returns the state reached by moving one step forward.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Waiting => Self::InProgress,
            Self::InProgress | Self::Completed => Self::Completed,
        }
    }

    /// Returns the state reached by moving one step backward.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Waiting | Self::InProgress => Self::Waiting,
            Self::Completed => Self::InProgress,
        }
    }

    /// Returns the human-readable status label.
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` for [`TaskState::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "waiting" => Ok(Self::Waiting),
            "in_progress" | "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}
