//! Contact details used to reach customers and staff.

use super::CustomerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized e-mail address.
///
/// Only the shape `local@domain` is checked; deliverability is the
/// notification transport's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated e-mail address.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::InvalidEmail`] when the value is not of
    /// the form `local@domain` or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CustomerDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(CustomerDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized.to_ascii_lowercase()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
