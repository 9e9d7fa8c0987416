//! Advisor endpoints of the tracker API.
//!
//! Implements the RecommendationClient port over two POST endpoints:
//! `roi-assistant` returns free-text metric guidance, and
//! `complexity-analyzer` returns a scored quadrant placement. Both
//! accept the completed response map as a flat JSON object.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::Response;
use serde::Deserialize;

use crate::domain::questionnaire::{ComplexityAssessment, ResponseMap, RoiAdvice};
use crate::ports::{RecommendationClient, RecommendationError};

use super::client::ApiClient;

impl ApiClient {
    /// Posts a completed response map to an advisor endpoint. The map
    /// serializes as a flat JSON object in question order.
    async fn post_advisor(
        &self,
        url: String,
        responses: &ResponseMap,
    ) -> Result<Response, RecommendationError> {
        self.http()
            .post(url)
            .json(responses)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecommendationError::timeout(self.timeout_secs())
                } else if e.is_connect() {
                    RecommendationError::network(format!("Connection failed: {}", e))
                } else {
                    RecommendationError::network(e.to_string())
                }
            })
    }

    /// Parses the advisor response status and handles errors.
    async fn advisor_status(&self, response: Response) -> Result<Response, RecommendationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = retry_after_secs(response.headers());
        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            429 => Err(RecommendationError::rate_limited(retry_after)),
            500..=599 => Err(RecommendationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(RecommendationError::api(status.as_u16(), error_body)),
        }
    }
}

#[async_trait]
impl RecommendationClient for ApiClient {
    async fn advise_roi(&self, responses: &ResponseMap) -> Result<RoiAdvice, RecommendationError> {
        let response = self
            .post_advisor(self.endpoint("roi-assistant"), responses)
            .await?;
        let response = self.advisor_status(response).await?;

        let reply: RoiReply = response.json().await.map_err(|e| {
            RecommendationError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        roi_advice_from(reply)
    }

    async fn analyze_complexity(
        &self,
        responses: &ResponseMap,
    ) -> Result<ComplexityAssessment, RecommendationError> {
        let response = self
            .post_advisor(self.endpoint("complexity-analyzer"), responses)
            .await?;
        let response = self.advisor_status(response).await?;

        let reply: ComplexityReply = response.json().await.map_err(|e| {
            RecommendationError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        assessment_from(reply)
    }
}

/// Reads the Retry-After header, defaulting to 30 seconds when absent
/// or malformed.
fn retry_after_secs(headers: &HeaderMap) -> u32 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(30)
}

fn roi_advice_from(reply: RoiReply) -> Result<RoiAdvice, RecommendationError> {
    if reply.recommendation.trim().is_empty() {
        return Err(RecommendationError::invalid_response(
            "recommendation text was empty",
        ));
    }

    Ok(RoiAdvice {
        recommendation: reply.recommendation,
    })
}

fn assessment_from(reply: ComplexityReply) -> Result<ComplexityAssessment, RecommendationError> {
    if reply.recommendation.trim().is_empty() {
        return Err(RecommendationError::invalid_response(
            "recommendation text was empty",
        ));
    }

    Ok(ComplexityAssessment {
        complexity_score: reply.complexity_score,
        value_score: reply.value_score,
        quadrant: reply.quadrant,
        recommendation: reply.recommendation,
    })
}

// ----- Advisor API Types -----

#[derive(Debug, Deserialize)]
struct RoiReply {
    recommendation: String,
}

#[derive(Debug, Deserialize)]
struct ComplexityReply {
    complexity_score: f64,
    value_score: f64,
    quadrant: String,
    recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn roi_reply_converts_to_advice() {
        let reply: RoiReply =
            serde_json::from_str(r#"{"recommendation":"Track hours saved per month."}"#).unwrap();

        let advice = roi_advice_from(reply).unwrap();
        assert_eq!(advice.recommendation, "Track hours saved per month.");
    }

    #[test]
    fn blank_roi_recommendation_is_rejected() {
        let reply: RoiReply = serde_json::from_str(r#"{"recommendation":"   "}"#).unwrap();

        let result = roi_advice_from(reply);
        assert!(matches!(
            result,
            Err(RecommendationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn complexity_reply_converts_to_assessment() {
        let json = r#"{
            "complexity_score": 72.0,
            "value_score": 85.0,
            "quadrant": "Strategic Bets",
            "recommendation": "High value but complex. Phase the rollout."
        }"#;
        let reply: ComplexityReply = serde_json::from_str(json).unwrap();

        let assessment = assessment_from(reply).unwrap();
        assert_eq!(assessment.complexity_score, 72.0);
        assert_eq!(assessment.value_score, 85.0);
        assert_eq!(assessment.quadrant, "Strategic Bets");
    }

    #[test]
    fn blank_complexity_recommendation_is_rejected() {
        let json = r#"{
            "complexity_score": 20.0,
            "value_score": 30.0,
            "quadrant": "Quick Wins",
            "recommendation": ""
        }"#;
        let reply: ComplexityReply = serde_json::from_str(json).unwrap();

        let result = assessment_from(reply);
        assert!(matches!(
            result,
            Err(RecommendationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn retry_after_header_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("45"));

        assert_eq!(retry_after_secs(&headers), 45);
    }

    #[test]
    fn retry_after_defaults_when_missing() {
        let headers = HeaderMap::new();

        assert_eq!(retry_after_secs(&headers), 30);
    }

    #[test]
    fn retry_after_defaults_when_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2025"));

        assert_eq!(retry_after_secs(&headers), 30);
    }
}
