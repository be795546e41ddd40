//! Workshop configuration.
//!
//! Hosts construct a [`WorkshopConfig`] directly or load it from JSON:
//!
//! ```
//! use garage::config::WorkshopConfig;
//! use garage::workforce::domain::ReallocationPolicy;
//!
//! let config = WorkshopConfig::from_json(r#"{ "reallocation_policy": "reassign" }"#)
//!     .expect("valid configuration");
//! assert_eq!(config.reallocation_policy, ReallocationPolicy::Reassign);
//! ```

use crate::customer::domain::{CustomerDomainError, RegistrationTemplate};
use crate::workforce::domain::ReallocationPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has unknown fields.
    #[error("failed to parse workshop configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The registration template does not compile.
    #[error("invalid registration template: {0}")]
    Template(#[source] CustomerDomainError),
}

/// Scheduling and messaging settings for a workshop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkshopConfig {
    /// How a task that already has a mechanic is treated when allocated again.
    pub reallocation_policy: ReallocationPolicy,
    /// Template rendered for customer registration listeners.
    pub registration_template: RegistrationTemplate,
}

impl WorkshopConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields
    /// and [`ConfigError::Template`] when the registration template does
    /// not compile.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config
            .registration_template
            .validate()
            .map_err(ConfigError::Template)?;
        Ok(config)
    }

    /// Sets the re-allocation policy.
    #[must_use]
    pub const fn with_reallocation_policy(mut self, policy: ReallocationPolicy) -> Self {
        self.reallocation_policy = policy;
        self
    }

    /// Sets the registration template.
    #[must_use]
    pub fn with_registration_template(mut self, template: RegistrationTemplate) -> Self {
        self.registration_template = template;
        self
    }
}
