//! GetInitiativeMetricsHandler - Per-initiative metric views.
//!
//! Packages one initiative's reported metrics for display: each metric's
//! chartable history plus current / year-to-date / all-time roll-ups.
//! Roll-ups honor the custom metric catalog's aggregation hints, falling
//! back to the name heuristic for metrics defined before the catalog
//! carried hints.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::InitiativeId;
use crate::domain::metrics::{AggregationWindow, MetricsAggregator, Rollup, TimeSeriesPoint};
use crate::ports::{PortfolioError, PortfolioReader};

/// Query for one initiative's metric views.
#[derive(Debug, Clone)]
pub struct GetInitiativeMetricsQuery {
    pub initiative_id: InitiativeId,
    /// Pins the year-to-date window; `None` uses the current calendar
    /// year.
    pub reference_year: Option<i32>,
}

/// One metric's display package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub name: String,
    /// Numeric history, ascending by period.
    pub series: Vec<TimeSeriesPoint>,
    pub current: Option<Rollup>,
    pub year_to_date: Option<Rollup>,
    pub all_time: Option<Rollup>,
}

/// Result of an initiative metrics query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInitiativeMetricsResult {
    pub initiative_id: InitiativeId,
    /// One view per reported metric, sorted by name.
    pub metrics: Vec<MetricView>,
}

/// Handler building per-initiative metric views.
pub struct GetInitiativeMetricsHandler {
    portfolio: Arc<dyn PortfolioReader>,
}

impl GetInitiativeMetricsHandler {
    pub fn new(portfolio: Arc<dyn PortfolioReader>) -> Self {
        Self { portfolio }
    }

    pub async fn handle(
        &self,
        query: GetInitiativeMetricsQuery,
    ) -> Result<GetInitiativeMetricsResult, PortfolioError> {
        // 1. Load the initiative's records and the custom metric catalog
        let records = self.portfolio.metrics_for(query.initiative_id).await?;
        let definitions = self.portfolio.custom_metrics().await?;

        // 2. Build one view per metric name with hint-aware roll-ups
        let aggregator = match query.reference_year {
            Some(year) => MetricsAggregator::new(year),
            None => MetricsAggregator::from_today(),
        };

        let metrics = aggregator
            .list_metric_names(&records)
            .into_iter()
            .map(|name| {
                let series = aggregator.build_time_series(&records, &name);
                let current = aggregator.aggregate_with_hints(
                    &records,
                    &name,
                    AggregationWindow::Current,
                    &definitions,
                );
                let year_to_date = aggregator.aggregate_with_hints(
                    &records,
                    &name,
                    AggregationWindow::YearToDate,
                    &definitions,
                );
                let all_time = aggregator.aggregate_with_hints(
                    &records,
                    &name,
                    AggregationWindow::AllTime,
                    &definitions,
                );
                MetricView {
                    name,
                    series,
                    current,
                    year_to_date,
                    all_time,
                }
            })
            .collect();

        Ok(GetInitiativeMetricsResult {
            initiative_id: query.initiative_id,
            metrics,
        })
    }
}
