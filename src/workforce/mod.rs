//! Garage staff: mechanics, managers, and the allocation protocol.
//!
//! - Domain types in [`domain`]
//!
//! The role check in [`domain::StaffRole::has_permission`] is advisory; the
//! allocation and completion operations trust their caller to consult it.

pub mod domain;

#[cfg(test)]
mod tests;
