//! Metric readings and per-period records.
//!
//! A `MetricPeriodRecord` is one month of reported metrics for one
//! initiative: an open-ended map of metric name to reading. Records are
//! owned by the external API and only read here; malformed wire values
//! are degraded to absent readings rather than errors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::{MetricPeriod, Timestamp, ValidationError};

/// One reported value for a named metric in a period.
///
/// The numeric value is absent when the operator reported only a
/// comment, or when the wire value could not be parsed as a finite
/// number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReading {
    value: Option<f64>,
    comment: Option<String>,
}

impl MetricReading {
    /// Creates a reading, normalizing degenerate inputs: non-finite
    /// values and blank comments become absent.
    pub fn new(value: Option<f64>, comment: Option<String>) -> Self {
        let value = value.filter(|v| v.is_finite());
        let comment = comment.filter(|c| !c.trim().is_empty());
        Self { value, comment }
    }

    /// Creates a reading holding only a numeric value.
    pub fn numeric(value: f64) -> Self {
        Self::new(Some(value), None)
    }

    /// Parses a free-form wire value into a finite number.
    ///
    /// Returns `None` for empty, non-numeric, or non-finite input. This
    /// is the tolerant boundary parse: bad values are excluded, never
    /// errored.
    pub fn parse_value(raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// One initiative's reported metrics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPeriodRecord {
    period: MetricPeriod,
    readings: BTreeMap<String, MetricReading>,
    modified_at: Timestamp,
}

impl MetricPeriodRecord {
    /// Creates an empty record for a period.
    pub fn new(period: MetricPeriod, modified_at: Timestamp) -> Self {
        Self {
            period,
            readings: BTreeMap::new(),
            modified_at,
        }
    }

    /// Adds or replaces the reading for a metric name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty after trimming.
    pub fn insert_reading(
        &mut self,
        name: impl Into<String>,
        reading: MetricReading,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("metric_name"));
        }
        self.readings.insert(name, reading);
        Ok(())
    }

    pub fn period(&self) -> MetricPeriod {
        self.period
    }

    pub fn modified_at(&self) -> Timestamp {
        self.modified_at
    }

    /// The reading for a metric name, if reported this period.
    pub fn reading(&self, name: &str) -> Option<&MetricReading> {
        self.readings.get(name)
    }

    /// The numeric value for a metric name, if reported and parseable.
    pub fn numeric_value(&self, name: &str) -> Option<f64> {
        self.readings.get(name).and_then(MetricReading::value)
    }

    /// Iterates readings in metric-name order.
    pub fn readings(&self) -> impl Iterator<Item = (&str, &MetricReading)> {
        self.readings.iter().map(|(name, r)| (name.as_str(), r))
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.readings.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
