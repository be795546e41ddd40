//! Adapters that report deliveries through `tracing`.

use crate::customer::domain::{CustomerId, EmailAddress};
use crate::customer::ports::RegistrationListener;
use crate::notification::domain::Notification;
use crate::notification::ports::NotificationSender;
use tracing::info;

/// Sender that logs each notification at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSender;

impl NotificationSender for TracingNotificationSender {
    fn deliver(&self, recipient: &EmailAddress, notification: &Notification) {
        info!(
            recipient = %recipient,
            customer_id = %notification.customer_id(),
            kind = %notification.kind(),
            text = notification.message(),
            "notification delivered"
        );
    }
}

/// Registration listener that logs each message at `info` level.
#[derive(Debug, Clone, Default)]
pub struct TracingRegistrationListener {
    label: String,
}

impl TracingRegistrationListener {
    /// Creates a listener whose events carry `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RegistrationListener for TracingRegistrationListener {
    fn on_registered(&self, customer_id: CustomerId, message: &str) {
        info!(
            listener = %self.label,
            customer_id = %customer_id,
            text = message,
            "customer registered"
        );
    }
}
