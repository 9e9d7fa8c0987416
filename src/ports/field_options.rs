//! Field Option Provider Port - Configurable dropdown values.
//!
//! Form fields like department, status, and benefit draw their choices
//! from an operator-maintained list rather than hard-coded enums. This
//! port loads the active options for one field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One selectable value for a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: i64,
    pub option_value: String,
    pub display_order: i32,
}

impl FieldOption {
    /// Sorts options the way they are displayed: by display order, then
    /// alphabetically within the same order.
    pub fn display_sort(options: &mut [FieldOption]) {
        options.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.option_value.cmp(&b.option_value))
        });
    }
}

/// Errors from field option loads.
#[derive(Debug, thiserror::Error)]
pub enum FieldOptionError {
    #[error("field options service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid field options response: {0}")]
    InvalidResponse(String),
}

impl FieldOptionError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for loading the active options of one form field.
#[async_trait]
pub trait FieldOptionProvider: Send + Sync {
    /// Loads options for a field in display order.
    ///
    /// # Arguments
    /// * `field_name` - The form field ("department", "status", ...)
    ///
    /// # Errors
    /// Returns `FieldOptionError` if the options cannot be loaded
    async fn options_for(&self, field_name: &str) -> Result<Vec<FieldOption>, FieldOptionError>;
}
