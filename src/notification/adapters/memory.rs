//! In-memory recording adapters.

use std::sync::{Arc, PoisonError, RwLock};

use crate::customer::domain::{CustomerId, EmailAddress};
use crate::customer::ports::RegistrationListener;
use crate::notification::domain::{Notification, NotificationKind};
use crate::notification::ports::NotificationSender;

/// Notification captured by [`InMemoryNotificationSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredNotification {
    /// Address the notification went to.
    pub recipient: EmailAddress,
    /// Customer the notification was built for.
    pub customer_id: CustomerId,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

/// Thread-safe sender that records every delivery.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationSender {
    delivered: Arc<RwLock<Vec<DeliveredNotification>>>,
}

impl InMemoryNotificationSender {
    /// Creates a sender with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every delivery so far, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<DeliveredNotification> {
        self.delivered
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the deliveries made to `customer_id`, oldest first.
    #[must_use]
    pub fn delivered_to(&self, customer_id: CustomerId) -> Vec<DeliveredNotification> {
        self.delivered()
            .into_iter()
            .filter(|delivery| delivery.customer_id == customer_id)
            .collect()
    }
}

impl NotificationSender for InMemoryNotificationSender {
    fn deliver(&self, recipient: &EmailAddress, notification: &Notification) {
        self.delivered
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DeliveredNotification {
                recipient: recipient.clone(),
                customer_id: notification.customer_id(),
                kind: notification.kind(),
                message: notification.message().to_owned(),
            });
    }
}

/// Registration message captured by [`RecordingRegistrationListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedRegistration {
    /// Customer that registered.
    pub customer_id: CustomerId,
    /// Rendered registration message.
    pub message: String,
}

/// Registration listener that records every message it receives.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingRegistrationListener {
    received: Arc<RwLock<Vec<ReceivedRegistration>>>,
}

impl RecordingRegistrationListener {
    /// Creates a listener with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every message received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> Vec<ReceivedRegistration> {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RegistrationListener for RecordingRegistrationListener {
    fn on_registered(&self, customer_id: CustomerId, message: &str) {
        self.received
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReceivedRegistration {
                customer_id,
                message: message.to_owned(),
            });
    }
}
