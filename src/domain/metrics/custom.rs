//! Operator-defined custom metrics.
//!
//! Operators can define arbitrary named metrics for initiatives to
//! report against. A definition fixes how the metric aggregates at
//! creation time instead of leaving that to be re-inferred from the
//! name on every read.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::aggregate::name_suggests_sum;

/// What a custom metric measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomMetricKind {
    /// A numeric metric with a unit of measure ("Hours", "Rands", "%").
    Quantitative { unit: String },
    /// A narrative metric; reported values are prose, never aggregated.
    Qualitative,
}

/// How a metric's values combine across periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationHint {
    Sum,
    Average,
    /// Not aggregatable; roll-up requests yield nothing.
    None,
}

impl AggregationHint {
    /// Infers the hint a metric name would historically have received:
    /// summed when the name contains a cumulative-sounding substring,
    /// averaged otherwise.
    pub fn infer(metric_name: &str) -> Self {
        if name_suggests_sum(metric_name) {
            AggregationHint::Sum
        } else {
            AggregationHint::Average
        }
    }
}

/// An operator-defined metric: name, optional description, kind, and
/// the aggregation hint fixed when the metric was defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMetricDefinition {
    name: String,
    description: Option<String>,
    kind: CustomMetricKind,
    aggregation: AggregationHint,
}

impl CustomMetricDefinition {
    /// Creates a definition with an explicit aggregation hint.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when:
    /// - The name is empty after trimming
    /// - A quantitative kind carries an empty unit
    pub fn try_new(
        name: impl Into<String>,
        description: Option<String>,
        kind: CustomMetricKind,
        aggregation: AggregationHint,
    ) -> Result<Self, ValidationError> {
        // 1. Validate the name
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("metric_name"));
        }

        // 2. Quantitative metrics need a unit
        if let CustomMetricKind::Quantitative { unit } = &kind {
            if unit.trim().is_empty() {
                return Err(ValidationError::empty_field("unit_of_measure"));
            }
        }

        let description = description.filter(|d| !d.trim().is_empty());
        Ok(Self {
            name,
            description,
            kind,
            aggregation,
        })
    }

    /// Creates a definition whose hint defaults from the name, matching
    /// how pre-existing metric names have always aggregated. Qualitative
    /// metrics default to no aggregation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::try_new`].
    pub fn with_inferred_hint(
        name: impl Into<String>,
        description: Option<String>,
        kind: CustomMetricKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let aggregation = match &kind {
            CustomMetricKind::Quantitative { .. } => AggregationHint::infer(&name),
            CustomMetricKind::Qualitative => AggregationHint::None,
        };
        Self::try_new(name, description, kind, aggregation)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &CustomMetricKind {
        &self.kind
    }

    pub fn aggregation(&self) -> AggregationHint {
        self.aggregation
    }

    pub fn is_quantitative(&self) -> bool {
        matches!(self.kind, CustomMetricKind::Quantitative { .. })
    }
}
