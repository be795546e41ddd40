//! Delivery port used by [`crate::notification::domain::Notification::send`].

use crate::customer::domain::EmailAddress;
use crate::notification::domain::Notification;

/// Synchronous delivery effect for notifications.
///
/// Implementations run on the caller's thread and do not retry or queue.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSender: Send + Sync {
    /// Delivers `notification` to `recipient`.
    fn deliver(&self, recipient: &EmailAddress, notification: &Notification);
}
