//! Attribution identity configuration
//!
//! The engine only reads from the tracker, but callers that issue writes
//! stamp them with an attribution identity. Dev mode pins the fixed test
//! user; production supplies the attributed person via configuration.

use serde::Deserialize;

use crate::adapters::api::AttributionIdentity;

use super::error::ValidationError;

/// Attribution identity configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Identity mode
    #[serde(default)]
    pub mode: IdentityMode,

    /// Attributed display name (production mode)
    pub attributed_name: Option<String>,

    /// Attributed email (production mode)
    pub attributed_email: Option<String>,
}

/// How outgoing writes are attributed
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    #[default]
    Dev,
    Production,
}

impl IdentityConfig {
    /// Resolves the identity stamped into outgoing writes.
    ///
    /// Incomplete production attribution falls back to the dev test user
    /// rather than failing a write path; `validate()` catches this at
    /// startup.
    pub fn current_user(&self) -> AttributionIdentity {
        match self.mode {
            IdentityMode::Dev => AttributionIdentity::test_user(),
            IdentityMode::Production => {
                match (
                    self.attributed_name.as_deref(),
                    self.attributed_email.as_deref(),
                ) {
                    (Some(name), Some(email))
                        if !name.trim().is_empty() && !email.trim().is_empty() =>
                    {
                        AttributionIdentity::new(name, email)
                    }
                    _ => {
                        tracing::warn!(
                            "Attribution identity incomplete; using the dev test user"
                        );
                        AttributionIdentity::test_user()
                    }
                }
            }
        }
    }

    /// Validate identity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == IdentityMode::Production {
            if self
                .attributed_name
                .as_deref()
                .map_or(true, |name| name.trim().is_empty())
            {
                return Err(ValidationError::MissingRequired("IDENTITY__ATTRIBUTED_NAME"));
            }
            match self.attributed_email.as_deref() {
                None => {
                    return Err(ValidationError::MissingRequired("IDENTITY__ATTRIBUTED_EMAIL"))
                }
                Some(email) if !email.contains('@') => {
                    return Err(ValidationError::InvalidAttributionEmail)
                }
                _ => {}
            }
        }
        Ok(())
    }
}
