//! Window roll-ups and time-series reshaping over metric records.
//!
//! All operations here are pure best-effort display logic: malformed or
//! absent values are excluded, an empty window yields nothing, and no
//! input is ever mutated.

use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::domain::foundation::MetricPeriod;

use super::custom::{AggregationHint, CustomMetricDefinition};
use super::record::MetricPeriodRecord;

/// Substrings marking a metric name as cumulative. Such metrics sum
/// across periods; every other name averages.
pub const SUM_TRIGGER_SUBSTRINGS: [&str; 5] = ["saved", "revenue", "cost", "time", "units"];

/// True when the name case-insensitively contains a cumulative marker.
///
/// Known fragility, kept for continuity with existing metric names: a
/// name like "Time to Value Score" triggers on "time" and is summed.
/// Definitions created through [`CustomMetricDefinition`] carry an
/// explicit hint instead of relying on this scan.
pub fn name_suggests_sum(metric_name: &str) -> bool {
    let lowered = metric_name.to_lowercase();
    SUM_TRIGGER_SUBSTRINGS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// The slice of records a roll-up ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationWindow {
    /// Only the most recent period present in the records.
    Current,
    /// Periods falling in the aggregator's reference year.
    YearToDate,
    /// Every record.
    AllTime,
}

/// A combined value for one metric over one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rollup {
    pub value: f64,
    pub is_average: bool,
    pub sample_count: usize,
}

/// One charted point of a metric's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub period: MetricPeriod,
    pub value: f64,
}

/// Reshapes per-period metric records into chartable series and scalar
/// roll-ups.
///
/// Year-to-date is measured against the reference year supplied at
/// construction so tests and replays can pin it; [`Self::from_today`]
/// anchors it to the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct MetricsAggregator {
    reference_year: i32,
}

impl MetricsAggregator {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// An aggregator whose year-to-date window is the current calendar
    /// year.
    pub fn from_today() -> Self {
        Self::new(Utc::now().year())
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Distinct metric names across the records, sorted for stable
    /// display. Record order does not matter.
    pub fn list_metric_names(&self, records: &[MetricPeriodRecord]) -> Vec<String> {
        let names: BTreeSet<&str> = records
            .iter()
            .flat_map(|record| record.metric_names())
            .collect();
        names.into_iter().map(String::from).collect()
    }

    /// The metric's numeric history, ascending by period. Periods
    /// without a numeric value for the name are skipped, never
    /// zero-filled.
    pub fn build_time_series(
        &self,
        records: &[MetricPeriodRecord],
        metric_name: &str,
    ) -> Vec<TimeSeriesPoint> {
        let mut points: Vec<TimeSeriesPoint> = records
            .iter()
            .filter_map(|record| {
                record.numeric_value(metric_name).map(|value| TimeSeriesPoint {
                    period: record.period(),
                    value,
                })
            })
            .collect();
        points.sort_by_key(|point| point.period);
        points
    }

    /// Rolls the metric up over the window with the name heuristic:
    /// cumulative-sounding names sum, the rest average.
    ///
    /// Returns `None` when no qualifying numeric value exists in the
    /// window, never a zero roll-up.
    pub fn aggregate(
        &self,
        records: &[MetricPeriodRecord],
        metric_name: &str,
        window: AggregationWindow,
    ) -> Option<Rollup> {
        self.rollup_with(records, metric_name, window, AggregationHint::infer(metric_name))
    }

    /// Rolls the metric up honoring a definition's aggregation hint when
    /// one is known for the name, falling back to the heuristic
    /// otherwise. A `None` hint means the metric never rolls up.
    pub fn aggregate_with_hints(
        &self,
        records: &[MetricPeriodRecord],
        metric_name: &str,
        window: AggregationWindow,
        definitions: &[CustomMetricDefinition],
    ) -> Option<Rollup> {
        let hint = definitions
            .iter()
            .find(|definition| definition.name() == metric_name)
            .map(CustomMetricDefinition::aggregation)
            .unwrap_or_else(|| AggregationHint::infer(metric_name));
        self.rollup_with(records, metric_name, window, hint)
    }

    fn rollup_with(
        &self,
        records: &[MetricPeriodRecord],
        metric_name: &str,
        window: AggregationWindow,
        hint: AggregationHint,
    ) -> Option<Rollup> {
        let average = match hint {
            AggregationHint::Sum => false,
            AggregationHint::Average => true,
            AggregationHint::None => return None,
        };

        let values = self.qualifying_values(records, metric_name, window);
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let value = if average {
            sum / values.len() as f64
        } else {
            sum
        };
        Some(Rollup {
            value,
            is_average: average,
            sample_count: values.len(),
        })
    }

    fn qualifying_values(
        &self,
        records: &[MetricPeriodRecord],
        metric_name: &str,
        window: AggregationWindow,
    ) -> Vec<f64> {
        let latest = match window {
            AggregationWindow::Current => records.iter().map(MetricPeriodRecord::period).max(),
            _ => None,
        };

        records
            .iter()
            .filter(|record| match window {
                AggregationWindow::AllTime => true,
                AggregationWindow::YearToDate => record.period().year() == self.reference_year,
                AggregationWindow::Current => Some(record.period()) == latest,
            })
            .filter_map(|record| record.numeric_value(metric_name))
            .collect()
    }
}
