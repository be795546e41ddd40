//! Port contracts for notification delivery.

pub mod sender;

pub use sender::NotificationSender;
