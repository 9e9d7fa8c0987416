//! Terminal outcomes returned by the recommendation service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A low/medium/high band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreBand::Low => "Low",
            ScoreBand::Medium => "Medium",
            ScoreBand::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of an ROI Assistant flow: free-form recommendation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAdvice {
    pub recommendation: String,
}

/// Outcome of a Complexity Analyzer flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub complexity_score: f64,
    pub value_score: f64,
    pub quadrant: String,
    pub recommendation: String,
}

impl ComplexityAssessment {
    /// Complexity band: below 33 low, below 66 medium, otherwise high.
    pub fn complexity_band(&self) -> ScoreBand {
        if self.complexity_score < 33.0 {
            ScoreBand::Low
        } else if self.complexity_score < 66.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }

    /// Value band: below 40 low, below 70 medium, otherwise high.
    pub fn value_band(&self) -> ScoreBand {
        if self.value_score < 40.0 {
            ScoreBand::Low
        } else if self.value_score < 70.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }

    /// The score summary shown as a metrics turn when the flow completes.
    pub fn summary_text(&self) -> String {
        format!(
            "Analysis Complete:\n\nComplexity Score: {}/100\nValue Score: {}/100\nClassification: {}",
            self.complexity_score, self.value_score, self.quadrant
        )
    }
}

/// What the recommendation service produced for a completed flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorOutcome {
    Roi(RoiAdvice),
    Complexity(ComplexityAssessment),
}

impl AdvisorOutcome {
    /// The recommendation text, present for every outcome.
    pub fn recommendation(&self) -> &str {
        match self {
            AdvisorOutcome::Roi(advice) => &advice.recommendation,
            AdvisorOutcome::Complexity(assessment) => &assessment.recommendation,
        }
    }

    /// The numeric score summary, when the outcome carries scores.
    pub fn metrics_summary(&self) -> Option<String> {
        match self {
            AdvisorOutcome::Roi(_) => None,
            AdvisorOutcome::Complexity(assessment) => Some(assessment.summary_text()),
        }
    }
}
