//! Port contracts for the customer context.

pub mod registration;

pub use registration::RegistrationListener;
