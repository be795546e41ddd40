//! Identifier types for garage staff.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a mechanic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MechanicId(u64);

impl MechanicId {
    /// Wraps an already allocated identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MechanicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManagerId(u64);

impl ManagerId {
    /// Wraps an already allocated identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A staff member of either role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "id", rename_all = "snake_case")]
pub enum StaffId {
    /// A manager.
    Manager(ManagerId),
    /// A mechanic.
    Mechanic(MechanicId),
}

impl StaffId {
    /// Returns the role of the staff member.
    #[must_use]
    pub const fn role(self) -> super::StaffRole {
        match self {
            Self::Manager(_) => super::StaffRole::Manager,
            Self::Mechanic(_) => super::StaffRole::Mechanic,
        }
    }
}
