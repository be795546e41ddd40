//! Domain model for customer notifications.

mod error;
mod kind;
mod notification;

pub use error::NotificationError;
pub use kind::NotificationKind;
pub use notification::{Notification, NotificationFactory};
