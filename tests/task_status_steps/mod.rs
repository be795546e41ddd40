//! Step definitions for task status behaviour scenarios.

pub mod then;
pub mod when;
