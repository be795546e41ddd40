//! Error types for task domain validation and parsing.

use super::{TaskId, TaskState};
use thiserror::Error;

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task cannot perform the requested operation in its current state.
    ///
    /// Reserved: boundary transitions are absorbed rather than rejected, so
    /// no lifecycle operation currently returns this variant.
    #[error("task {task_id} cannot leave state {state}")]
    InvalidState {
        /// Task that was addressed.
        task_id: TaskId,
        /// State the task was in.
        state: TaskState,
    },
}

/// Error returned while parsing task states from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
