//! Customer notifications and their synchronous dispatch.
//!
//! Notifications are built by kind for a customer and sent through the
//! [`ports::NotificationSender`] port. Sending is attempted only when the
//! customer has a contact address.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
