//! Notification value and the factory building it.

use super::{NotificationError, NotificationKind};
use crate::customer::domain::{Customer, CustomerId, EmailAddress};
use crate::notification::ports::NotificationSender;
use tracing::{debug, warn};

/// A message constructed for one customer.
///
/// Notifications are built, sent, and discarded; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    customer_id: CustomerId,
    customer_name: String,
    recipient: Option<EmailAddress>,
}

impl Notification {
    /// Returns the notification kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the addressed customer.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the addressed customer's name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the contact address, if the customer has one.
    #[must_use]
    pub const fn recipient(&self) -> Option<&EmailAddress> {
        self.recipient.as_ref()
    }

    /// Returns the message text.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Sends the notification through `sender` on the calling thread.
    ///
    /// Delivery is attempted only when the customer has a contact address.
    /// Returns whether delivery was attempted.
    pub fn send(&self, sender: &dyn NotificationSender) -> bool {
        let Some(recipient) = self.recipient.as_ref() else {
            warn!(
                customer_id = %self.customer_id,
                kind = %self.kind,
                "customer has no contact address; notification not sent"
            );
            return false;
        };
        debug!(customer_id = %self.customer_id, kind = %self.kind, "sending notification");
        sender.deliver(recipient, self);
        true
    }
}

/// Builds notifications by kind for a customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationFactory;

impl NotificationFactory {
    /// Creates a notification of `kind` addressed to `customer`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::MissingCustomer`] when no customer is
    /// supplied.
    pub fn create(
        kind: NotificationKind,
        customer: Option<&Customer>,
    ) -> Result<Notification, NotificationError> {
        let target = customer.ok_or(NotificationError::MissingCustomer)?;
        Ok(Notification {
            kind,
            customer_id: target.id(),
            customer_name: target.name().to_owned(),
            recipient: target.email().cloned(),
        })
    }

    /// Creates a notification from a type name such as `"OFFER"`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::UnknownKind`] for an unrecognized type
    /// name and [`NotificationError::MissingCustomer`] when no customer is
    /// supplied.
    pub fn create_by_name(
        kind: &str,
        customer: Option<&Customer>,
    ) -> Result<Notification, NotificationError> {
        Self::create(NotificationKind::try_from(kind)?, customer)
    }
}
