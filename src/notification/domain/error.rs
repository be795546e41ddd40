//! Error types for notification construction.

use thiserror::Error;

/// Invalid-argument errors raised while building a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// No customer was supplied as recipient.
    #[error("notification requires a customer")]
    MissingCustomer,

    /// The notification type name is not recognized.
    #[error("unknown notification type: {0}")]
    UnknownKind(String),
}
