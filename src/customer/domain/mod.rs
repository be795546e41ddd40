//! Domain model for customers and their vehicles.

mod contact;
mod customer;
mod error;
mod ids;
mod registration;
mod vehicle;

pub use contact::EmailAddress;
pub use customer::Customer;
pub use error::CustomerDomainError;
pub use ids::{CustomerId, VehicleId};
pub use registration::RegistrationTemplate;
pub use vehicle::Vehicle;
