//! Customers, their vehicles, and the registration listener channel.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//!
//! Listener adapters live in [`crate::notification::adapters`].

pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
