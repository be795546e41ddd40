//! Notification variants and their fixed message templates.

use super::NotificationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of customer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// The customer's vehicle is ready for pickup.
    TaskComplete,
    /// A promotional offer for registered customers.
    Offer,
    /// An invitation to register and the benefits of doing so.
    RegistrationBenefit,
}

impl NotificationKind {
    /// Every notification kind.
    pub const ALL: [Self; 3] = [Self::TaskComplete, Self::Offer, Self::RegistrationBenefit];

    /// Returns the fixed message carried by this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TaskComplete => "Your vehicle is ready for pickup!",
            Self::Offer => "Special offer for our valued customer: 10% off on your next service!",
            Self::RegistrationBenefit => {
                "Register with us to receive exclusive benefits: Priority booking, special discounts, and more!"
            }
        }
    }

    /// Returns the canonical type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskComplete => "TASK_COMPLETE",
            Self::Offer => "OFFER",
            Self::RegistrationBenefit => "REGISTRATION_BENEFIT",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NotificationKind {
    type Error = NotificationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TASK_COMPLETE" => Ok(Self::TaskComplete),
            "OFFER" => Ok(Self::Offer),
            "REGISTRATION_BENEFIT" => Ok(Self::RegistrationBenefit),
            _ => Err(NotificationError::UnknownKind(value.to_owned())),
        }
    }
}
