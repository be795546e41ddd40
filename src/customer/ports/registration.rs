//! Listener port notified when a customer registers.

use crate::customer::domain::CustomerId;

/// Observer attached to a customer and invoked synchronously on registration.
///
/// Listeners run on the caller's thread in attachment order. The customer is
/// exclusively borrowed while its listeners run, so a listener cannot
/// re-enter the same customer's registration; it may register other
/// customers it owns.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationListener: Send + Sync {
    /// Receives the rendered registration message for `customer_id`.
    fn on_registered(&self, customer_id: CustomerId, message: &str);
}
