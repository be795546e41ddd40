//! Adapter implementations for the notification and registration ports.
//!
//! - [`memory`]: recording adapters for tests and embedding hosts
//! - [`logging`]: adapters that emit `tracing` events instead of delivering

pub mod logging;
pub mod memory;

pub use logging::{TracingNotificationSender, TracingRegistrationListener};
pub use memory::{
    DeliveredNotification, InMemoryNotificationSender, ReceivedRegistration,
    RecordingRegistrationListener,
};
