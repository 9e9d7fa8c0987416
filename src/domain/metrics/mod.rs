//! Metrics module - Readings, roll-ups, and trend math.
//!
//! This module defines:
//! - Per-period metric records and tolerant value parsing
//! - The window aggregator (current / year-to-date / all-time)
//! - Operator-defined custom metrics with aggregation hints
//! - Cross-initiative monthly trend aggregation
//! - Display formatting helpers for stat cards

mod aggregate;
mod custom;
mod format;
mod record;
mod trends;

pub use aggregate::{
    name_suggests_sum, AggregationWindow, MetricsAggregator, Rollup, TimeSeriesPoint,
    SUM_TRIGGER_SUBSTRINGS,
};
pub use custom::{AggregationHint, CustomMetricDefinition, CustomMetricKind};
pub use format::{format_percent, format_rand, percent_change};
pub use record::{MetricPeriodRecord, MetricReading};
pub use trends::{monthly_trends, TrendMetric, TrendPoint};
