//! Error types for customer and vehicle domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating customer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerDomainError {
    /// The name is empty after trimming.
    #[error("customer name must not be empty")]
    EmptyName,

    /// The e-mail address is malformed.
    #[error("invalid e-mail address '{0}'")]
    InvalidEmail(String),

    /// The vehicle registration plate is empty after trimming.
    #[error("vehicle registration must not be empty")]
    EmptyRegistration,

    /// The registration message template failed to render.
    #[error("failed to render registration message: {0}")]
    TemplateRender(String),
}
