//! Registration message template.

use super::CustomerDomainError;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

/// Template rendered into the message passed to registration listeners.
///
/// The template sees `name` (the customer name) and `customer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationTemplate(String);

impl RegistrationTemplate {
    /// Template used when none is configured.
    pub const DEFAULT_SOURCE: &'static str = "Customer registered: {{ name }}";

    /// Creates a template from `minijinja` source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Returns the template source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.0
    }

    /// Checks that the template source compiles.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::TemplateRender`] when the source is
    /// malformed.
    pub fn validate(&self) -> Result<(), CustomerDomainError> {
        Environment::new()
            .template_from_str(&self.0)
            .map(|_| ())
            .map_err(|error| CustomerDomainError::TemplateRender(error.to_string()))
    }

    /// Renders the listener message for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::TemplateRender`] when the template
    /// source is malformed or fails to evaluate.
    pub fn render(&self, customer_id: u64, name: &str) -> Result<String, CustomerDomainError> {
        Environment::new()
            .render_str(&self.0, context! { name => name, customer_id => customer_id })
            .map_err(|error| CustomerDomainError::TemplateRender(error.to_string()))
    }
}

impl Default for RegistrationTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SOURCE)
    }
}
