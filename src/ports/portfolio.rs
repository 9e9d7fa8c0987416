//! Portfolio Reader Port - Read access to the initiative portfolio.
//!
//! The portfolio (initiatives, their monthly metric records, and the
//! custom metric catalog) is owned by the external API; this port only
//! reads it. Write paths are out of scope for the engine.

use async_trait::async_trait;

use crate::domain::foundation::InitiativeId;
use crate::domain::metrics::{CustomMetricDefinition, MetricPeriodRecord};
use crate::domain::portfolio::InitiativeSnapshot;

/// Errors from portfolio reads.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("initiative not found: {0}")]
    NotFound(InitiativeId),

    #[error("portfolio service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("portfolio service unavailable: {message}")]
    Unavailable { message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid portfolio response: {0}")]
    InvalidResponse(String),
}

impl PortfolioError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
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

/// Port for reading the initiative portfolio.
#[async_trait]
pub trait PortfolioReader: Send + Sync {
    /// Lists every initiative snapshot.
    ///
    /// # Errors
    /// Returns `PortfolioError` if the portfolio cannot be read
    async fn initiatives(&self) -> Result<Vec<InitiativeSnapshot>, PortfolioError>;

    /// Loads one initiative's monthly metric records. The API returns
    /// them newest-first; callers needing chronological order sort via
    /// the aggregator.
    ///
    /// # Arguments
    /// * `initiative` - The initiative to load records for
    ///
    /// # Errors
    /// Returns `PortfolioError::NotFound` if the initiative does not
    /// exist
    async fn metrics_for(
        &self,
        initiative: InitiativeId,
    ) -> Result<Vec<MetricPeriodRecord>, PortfolioError>;

    /// Lists the operator-defined custom metric catalog.
    ///
    /// # Errors
    /// Returns `PortfolioError` if the catalog cannot be read
    async fn custom_metrics(&self) -> Result<Vec<CustomMetricDefinition>, PortfolioError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_initiative() {
        let err = PortfolioError::NotFound(InitiativeId::new(42));
        assert_eq!(err.to_string(), "initiative not found: 42");
    }

    #[test]
    fn api_error_carries_status_and_message() {
        let err = PortfolioError::api(502, "bad gateway");
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }
}
