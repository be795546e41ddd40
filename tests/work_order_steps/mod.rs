//! Step definitions for work-order behaviour scenarios.

pub mod given;
pub mod when;
pub mod world;
