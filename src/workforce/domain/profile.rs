//! Staff profile and password credentials.

use super::WorkforceError;
use crate::customer::domain::EmailAddress;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Salted SHA-256 digest of a staff password.
///
/// The salt is the account's normalized e-mail address, so equal passwords on
/// different accounts produce different digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    digest: [u8; 32],
}

impl Credentials {
    /// Derives credentials for `email` from a plain-text password.
    #[must_use]
    pub fn from_password(email: &EmailAddress, password: &str) -> Self {
        Self {
            digest: password_digest(email, password),
        }
    }

    /// Returns whether `password` matches these credentials.
    #[must_use]
    pub fn verify(&self, email: &EmailAddress, password: &str) -> bool {
        self.digest == password_digest(email, password)
    }
}

fn password_digest(email: &EmailAddress, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(email.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Identity shared by managers and mechanics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    name: String,
    email: EmailAddress,
    credentials: Credentials,
}

impl StaffProfile {
    /// Creates a profile, hashing the supplied password.
    ///
    /// # Errors
    ///
    /// Returns [`WorkforceError::EmptyName`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        password: &str,
    ) -> Result<Self, WorkforceError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WorkforceError::EmptyName);
        }
        let credentials = Credentials::from_password(&email, password);
        Ok(Self {
            name: trimmed.to_owned(),
            email,
            credentials,
        })
    }

    /// Returns the staff member's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the login e-mail address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns whether `password` authenticates this profile.
    #[must_use]
    pub fn authenticate(&self, password: &str) -> bool {
        self.credentials.verify(&self.email, password)
    }
}
