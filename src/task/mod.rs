//! Work-order tasks and their status lifecycle.
//!
//! Tasks are created against vehicles, ordered by priority in mechanic work
//! queues, and moved through the `Waiting → In Progress → Completed` state
//! machine. Cross-aggregate orchestration (allocation, completion
//! notifications) lives in [`crate::workshop`].
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
