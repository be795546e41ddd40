//! Domain model for garage staff and work allocation.
//!
//! Mechanics own priority-ordered work queues; managers allocate tasks to
//! mechanics on their team.

mod allocation;
mod error;
mod ids;
mod manager;
mod mechanic;
mod profile;
mod queue;
mod role;

pub use allocation::{AllocationOutcome, ReallocationPolicy};
pub use error::{AllocationError, WorkforceError};
pub use ids::{ManagerId, MechanicId, StaffId};
pub use manager::Manager;
pub use mechanic::Mechanic;
pub use profile::{Credentials, StaffProfile};
pub use queue::TaskQueue;
pub use role::StaffRole;
