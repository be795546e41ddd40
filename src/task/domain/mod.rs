//! Domain model for work-order tasks.
//!
//! A task is a unit of mechanical work raised against one vehicle. It carries
//! a priority used by mechanic work queues and moves through the
//! [`TaskState`] machine until it is completed.

mod error;
mod ids;
mod state;
mod task;

pub use error::{ParseTaskStateError, TaskDomainError};
pub use ids::{Priority, TaskId};
pub use state::TaskState;
pub use task::{PersistedTaskData, Task};
