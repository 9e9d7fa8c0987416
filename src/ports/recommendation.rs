//! Recommendation Client Port - Interface for the advisory service.
//!
//! This port abstracts the terminal call each questionnaire flow makes
//! once every question is answered: the collected responses go out, a
//! recommendation (and, for complexity analysis, scored results) comes
//! back.
//!
//! # Design
//!
//! - One method per flow, each returning that flow's domain outcome
//! - No retry semantics; a failed call surfaces one error and the
//!   session recovers only through reset
//! - `RecommendationError::is_retryable` classifies transport-level
//!   failures for logging, not for automatic retry

use async_trait::async_trait;

use crate::domain::questionnaire::{ComplexityAssessment, ResponseMap, RoiAdvice};

/// Errors from the advisory service call.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Service reachable but answered with a failure status.
    #[error("advisory service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the service.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Service could not be reached.
    #[error("advisory service unavailable: {message}")]
    Unavailable { message: String },

    /// Transport-level failure mid-request.
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but could not be interpreted.
    #[error("invalid advisory response: {0}")]
    InvalidResponse(String),

    /// The configured client timeout elapsed.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl RecommendationError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
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

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// True for transient transport failures. Used for log
    /// classification; the engine never retries automatically.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RecommendationError::RateLimited { .. }
                | RecommendationError::Unavailable { .. }
                | RecommendationError::Network(_)
                | RecommendationError::Timeout { .. }
        )
    }
}

/// Port for the terminal advisory call of each flow.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Requests ROI metric recommendations for a completed ROI
    /// Assistant questionnaire.
    ///
    /// # Arguments
    /// * `responses` - Every collected answer, keyed by question field
    ///
    /// # Errors
    /// Returns `RecommendationError` if the call fails or the response
    /// cannot be interpreted
    async fn advise_roi(&self, responses: &ResponseMap) -> Result<RoiAdvice, RecommendationError>;

    /// Requests a scored complexity assessment for a completed
    /// Complexity Analyzer questionnaire.
    ///
    /// # Arguments
    /// * `responses` - Every collected answer, keyed by question field
    ///
    /// # Errors
    /// Returns `RecommendationError` if the call fails or the response
    /// cannot be interpreted
    async fn analyze_complexity(
        &self,
        responses: &ResponseMap,
    ) -> Result<ComplexityAssessment, RecommendationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification_covers_transient_failures() {
        assert!(RecommendationError::rate_limited(30).is_retryable());
        assert!(RecommendationError::unavailable("connection refused").is_retryable());
        assert!(RecommendationError::network("reset by peer").is_retryable());
        assert!(RecommendationError::timeout(30).is_retryable());

        assert!(!RecommendationError::api(500, "boom").is_retryable());
        assert!(!RecommendationError::invalid_response("missing field").is_retryable());
    }

    #[test]
    fn errors_display_their_context() {
        let err = RecommendationError::api(503, "maintenance window");
        assert_eq!(
            err.to_string(),
            "advisory service returned 503: maintenance window"
        );

        let err = RecommendationError::timeout(30);
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
