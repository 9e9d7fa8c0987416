//! Mock recommendation client for testing.
//!
//! Provides a configurable mock implementation of the
//! RecommendationClient port, allowing tests to run without a live
//! tracker deployment.
//!
//! # Features
//!
//! - Pre-configured replies per advisor endpoint
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockRecommendationClient::new()
//!     .with_advice("Track hours saved per month.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let advice = client.advise_roi(&responses).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::questionnaire::{ComplexityAssessment, ResponseMap, RoiAdvice};
use crate::ports::{RecommendationClient, RecommendationError};

/// Mock recommendation client for testing.
///
/// Configurable to return specific replies, simulate delays, or inject
/// errors.
#[derive(Debug, Clone, Default)]
pub struct MockRecommendationClient {
    /// Pre-configured ROI replies (consumed in order).
    roi_replies: Arc<Mutex<VecDeque<Result<RoiAdvice, MockAdvisorError>>>>,
    /// Pre-configured complexity replies (consumed in order).
    complexity_replies: Arc<Mutex<VecDeque<Result<ComplexityAssessment, MockAdvisorError>>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<AdvisorCall>>>,
}

/// One recorded advisor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorCall {
    Roi(ResponseMap),
    Complexity(ResponseMap),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockAdvisorError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate service unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockAdvisorError> for RecommendationError {
    fn from(err: MockAdvisorError) -> Self {
        match err {
            MockAdvisorError::RateLimited { retry_after_secs } => {
                RecommendationError::rate_limited(retry_after_secs)
            }
            MockAdvisorError::Unavailable { message } => {
                RecommendationError::unavailable(message)
            }
            MockAdvisorError::Network { message } => RecommendationError::network(message),
            MockAdvisorError::Timeout { timeout_secs } => {
                RecommendationError::Timeout { timeout_secs }
            }
        }
    }
}

impl MockRecommendationClient {
    /// Creates a new mock client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an ROI advice reply.
    pub fn with_advice(self, recommendation: impl Into<String>) -> Self {
        let mut replies = self.roi_replies.lock().unwrap();
        replies.push_back(Ok(RoiAdvice {
            recommendation: recommendation.into(),
        }));
        drop(replies);
        self
    }

    /// Queues a complexity assessment reply.
    pub fn with_assessment(self, assessment: ComplexityAssessment) -> Self {
        let mut replies = self.complexity_replies.lock().unwrap();
        replies.push_back(Ok(assessment));
        drop(replies);
        self
    }

    /// Queues an error for the next ROI call.
    pub fn with_roi_error(self, error: MockAdvisorError) -> Self {
        let mut replies = self.roi_replies.lock().unwrap();
        replies.push_back(Err(error));
        drop(replies);
        self
    }

    /// Queues an error for the next complexity call.
    pub fn with_complexity_error(self, error: MockAdvisorError) -> Self {
        let mut replies = self.complexity_replies.lock().unwrap();
        replies.push_back(Err(error));
        drop(replies);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<AdvisorCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next ROI reply or a default.
    fn next_roi_reply(&self) -> Result<RoiAdvice, MockAdvisorError> {
        self.roi_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(RoiAdvice {
                    recommendation: "Mock recommendation".to_string(),
                })
            })
    }

    /// Gets the next complexity reply or a default.
    fn next_complexity_reply(&self) -> Result<ComplexityAssessment, MockAdvisorError> {
        self.complexity_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ComplexityAssessment {
                    complexity_score: 25.0,
                    value_score: 80.0,
                    quadrant: "Low Hanging Fruit".to_string(),
                    recommendation: "Mock recommendation".to_string(),
                })
            })
    }
}

#[async_trait]
impl RecommendationClient for MockRecommendationClient {
    async fn advise_roi(&self, responses: &ResponseMap) -> Result<RoiAdvice, RecommendationError> {
        // Record the call
        self.calls
            .lock()
            .unwrap()
            .push(AdvisorCall::Roi(responses.clone()));

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_roi_reply().map_err(RecommendationError::from)
    }

    async fn analyze_complexity(
        &self,
        responses: &ResponseMap,
    ) -> Result<ComplexityAssessment, RecommendationError> {
        // Record the call
        self.calls
            .lock()
            .unwrap()
            .push(AdvisorCall::Complexity(responses.clone()));

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_complexity_reply()
            .map_err(RecommendationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_responses() -> ResponseMap {
        let mut responses = ResponseMap::new();
        responses
            .insert("initiative_name", "Invoice Matching")
            .unwrap();
        responses
    }

    #[tokio::test]
    async fn returns_configured_advice() {
        let client = MockRecommendationClient::new().with_advice("Measure cost per invoice.");

        let advice = client.advise_roi(&sample_responses()).await.unwrap();
        assert_eq!(advice.recommendation, "Measure cost per invoice.");
    }

    #[tokio::test]
    async fn returns_default_advice_when_queue_is_empty() {
        let client = MockRecommendationClient::new();

        let advice = client.advise_roi(&sample_responses()).await.unwrap();
        assert_eq!(advice.recommendation, "Mock recommendation");
    }

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let client = MockRecommendationClient::new()
            .with_advice("First")
            .with_advice("Second");

        let first = client.advise_roi(&sample_responses()).await.unwrap();
        let second = client.advise_roi(&sample_responses()).await.unwrap();

        assert_eq!(first.recommendation, "First");
        assert_eq!(second.recommendation, "Second");
    }

    #[tokio::test]
    async fn injected_error_is_returned() {
        let client = MockRecommendationClient::new().with_roi_error(MockAdvisorError::Timeout {
            timeout_secs: 30,
        });

        let result = client.advise_roi(&sample_responses()).await;
        assert!(matches!(
            result,
            Err(RecommendationError::Timeout { timeout_secs: 30 })
        ));
    }

    #[tokio::test]
    async fn complexity_reply_is_returned() {
        let assessment = ComplexityAssessment {
            complexity_score: 72.0,
            value_score: 85.0,
            quadrant: "Needs AI COE".to_string(),
            recommendation: "Stage the rollout.".to_string(),
        };
        let client = MockRecommendationClient::new().with_assessment(assessment.clone());

        let reply = client.analyze_complexity(&sample_responses()).await.unwrap();
        assert_eq!(reply, assessment);
    }

    #[tokio::test]
    async fn calls_are_recorded_per_endpoint() {
        let client = MockRecommendationClient::new();
        let responses = sample_responses();

        client.advise_roi(&responses).await.unwrap();
        client.analyze_complexity(&responses).await.unwrap();

        assert_eq!(client.call_count(), 2);
        let calls = client.get_calls();
        assert_eq!(calls[0], AdvisorCall::Roi(responses.clone()));
        assert_eq!(calls[1], AdvisorCall::Complexity(responses));

        client.clear_calls();
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn delay_is_applied_before_replying() {
        let client = MockRecommendationClient::new()
            .with_advice("Delayed")
            .with_delay(Duration::from_millis(20));

        let start = std::time::Instant::now();
        client.advise_roi(&sample_responses()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
