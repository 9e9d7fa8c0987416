//! Portfolio endpoints of the tracker API.
//!
//! Implements the PortfolioReader port over three GET endpoints:
//! the initiative list, one initiative's monthly metric records, and
//! the operator-defined custom metric catalog. Conversion into domain
//! types drops malformed rows where the record as a whole is still
//! usable, and fails the fetch where it is not.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Response;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::domain::foundation::{InitiativeId, MetricPeriod, Timestamp};
use crate::domain::metrics::{
    CustomMetricDefinition, CustomMetricKind, MetricPeriodRecord, MetricReading,
};
use crate::domain::portfolio::{InitiativeSnapshot, InitiativeStatus};
use crate::ports::{PortfolioError, PortfolioReader};

use super::client::ApiClient;

impl ApiClient {
    /// Issues a portfolio GET and maps transport failures.
    async fn get_portfolio(&self, url: String) -> Result<Response, PortfolioError> {
        self.http().get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                PortfolioError::network(format!(
                    "Request timed out after {}s",
                    self.timeout_secs()
                ))
            } else if e.is_connect() {
                PortfolioError::network(format!("Connection failed: {}", e))
            } else {
                PortfolioError::network(e.to_string())
            }
        })
    }

    /// Parses the response status and handles errors.
    ///
    /// A 404 maps to `NotFound` only on initiative-scoped fetches;
    /// collection endpoints report it as a plain API error.
    async fn portfolio_status(
        &self,
        response: Response,
        scope: Option<InitiativeId>,
    ) -> Result<Response, PortfolioError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match (status.as_u16(), scope) {
            (404, Some(initiative)) => Err(PortfolioError::NotFound(initiative)),
            (500..=599, _) => Err(PortfolioError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            (code, _) => Err(PortfolioError::api(code, error_body)),
        }
    }
}

#[async_trait]
impl PortfolioReader for ApiClient {
    async fn initiatives(&self) -> Result<Vec<InitiativeSnapshot>, PortfolioError> {
        let response = self.get_portfolio(self.endpoint("initiatives")).await?;
        let response = self.portfolio_status(response, None).await?;

        let rows: Vec<InitiativeRow> = response.json().await.map_err(|e| {
            PortfolioError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        rows.into_iter().map(snapshot_from).collect()
    }

    async fn metrics_for(
        &self,
        initiative: InitiativeId,
    ) -> Result<Vec<MetricPeriodRecord>, PortfolioError> {
        let url = self.endpoint(&format!("initiatives/{}/metrics", initiative));
        let response = self.get_portfolio(url).await?;
        let response = self.portfolio_status(response, Some(initiative)).await?;

        let rows: Vec<MetricRow> = response.json().await.map_err(|e| {
            PortfolioError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        rows.into_iter().map(record_from).collect()
    }

    async fn custom_metrics(&self) -> Result<Vec<CustomMetricDefinition>, PortfolioError> {
        let response = self.get_portfolio(self.endpoint("custom-metrics")).await?;
        let response = self.portfolio_status(response, None).await?;

        let rows: Vec<CustomMetricRow> = response.json().await.map_err(|e| {
            PortfolioError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        Ok(rows.into_iter().filter_map(definition_from).collect())
    }
}

fn snapshot_from(row: InitiativeRow) -> Result<InitiativeSnapshot, PortfolioError> {
    let status = row
        .status
        .parse::<InitiativeStatus>()
        .map_err(|e| PortfolioError::invalid_response(e.to_string()))?;

    Ok(InitiativeSnapshot {
        id: InitiativeId::new(row.id),
        name: row.use_case_name,
        status,
        departments: row.departments,
        benefit: row.benefit,
        initiative_type: row.initiative_type,
        percentage_complete: row.percentage_complete.unwrap_or(0.0),
    })
}

fn record_from(row: MetricRow) -> Result<MetricPeriodRecord, PortfolioError> {
    let period = MetricPeriod::try_new(&row.metric_period)
        .map_err(|e| PortfolioError::invalid_response(e.to_string()))?;
    let modified_at = parse_wire_timestamp(&row.modified_at)?;

    let mut record = MetricPeriodRecord::new(period, modified_at);
    for (name, wire) in row.additional_metrics.unwrap_or_default() {
        // Rows keyed by a blank name are dropped rather than failing
        // the whole fetch
        if name.trim().is_empty() {
            continue;
        }

        let value = wire.value.as_ref().and_then(reading_value);
        let reading = MetricReading::new(value, wire.comments);
        record
            .insert_reading(name, reading)
            .map_err(|e| PortfolioError::invalid_response(e.to_string()))?;
    }

    Ok(record)
}

/// Extracts a numeric reading from a wire value that may arrive as a
/// JSON number or a numeric string.
fn reading_value(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => MetricReading::parse_value(s),
        _ => None,
    }
}

/// Parses a wire timestamp. Upstream timestamps may omit the UTC
/// offset, so a naive ISO form is accepted and read as UTC.
fn parse_wire_timestamp(raw: &str) -> Result<Timestamp, PortfolioError> {
    if let Ok(ts) = Timestamp::parse_rfc3339(raw) {
        return Ok(ts);
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Timestamp::from_datetime(naive.and_utc()))
        .map_err(|_| PortfolioError::invalid_response(format!("Unrecognized timestamp: {}", raw)))
}

/// Converts a catalog row, dropping rows the domain cannot represent.
///
/// A quantitative metric without a unit is dropped; hint lookups for
/// its name then fall back to the name heuristic, matching how such
/// metrics aggregated before the catalog carried hints.
fn definition_from(row: CustomMetricRow) -> Option<CustomMetricDefinition> {
    let kind = if row.metric_type == "quantitative" {
        let unit = row.unit_of_measure.unwrap_or_default();
        if unit.trim().is_empty() {
            return None;
        }
        CustomMetricKind::Quantitative { unit }
    } else {
        CustomMetricKind::Qualitative
    };

    CustomMetricDefinition::with_inferred_hint(row.metric_name, row.metric_description, kind).ok()
}

// ----- Tracker API Types -----

#[derive(Debug, Deserialize)]
struct InitiativeRow {
    id: i64,
    use_case_name: String,
    status: String,
    #[serde(default)]
    departments: Vec<String>,
    #[serde(default)]
    benefit: Option<String>,
    #[serde(default)]
    initiative_type: Option<String>,
    #[serde(default)]
    percentage_complete: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MetricRow {
    metric_period: String,
    #[serde(default)]
    additional_metrics: Option<HashMap<String, ReadingRow>>,
    modified_at: String,
}

#[derive(Debug, Deserialize)]
struct ReadingRow {
    #[serde(default)]
    value: Option<JsonValue>,
    #[serde(default)]
    comments: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomMetricRow {
    metric_name: String,
    #[serde(default)]
    metric_description: Option<String>,
    metric_type: String,
    #[serde(default)]
    unit_of_measure: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::AggregationHint;

    #[test]
    fn initiative_row_converts_to_snapshot() {
        let json = r#"{
            "id": 7,
            "use_case_name": "Invoice Matching",
            "status": "In Progress",
            "departments": ["Finance", "Claims"],
            "benefit": "Cost Reduction",
            "initiative_type": "Automation",
            "percentage_complete": 60.0
        }"#;
        let row: InitiativeRow = serde_json::from_str(json).unwrap();

        let snapshot = snapshot_from(row).unwrap();
        assert_eq!(snapshot.id, InitiativeId::new(7));
        assert_eq!(snapshot.name, "Invoice Matching");
        assert_eq!(snapshot.status, InitiativeStatus::InProgress);
        assert_eq!(snapshot.departments, vec!["Finance", "Claims"]);
        assert_eq!(snapshot.percentage_complete, 60.0);
    }

    #[test]
    fn missing_completion_defaults_to_zero() {
        let json = r#"{"id": 1, "use_case_name": "X", "status": "Ideation"}"#;
        let row: InitiativeRow = serde_json::from_str(json).unwrap();

        let snapshot = snapshot_from(row).unwrap();
        assert_eq!(snapshot.percentage_complete, 0.0);
        assert!(snapshot.departments.is_empty());
        assert!(snapshot.benefit.is_none());
    }

    #[test]
    fn unknown_status_fails_the_conversion() {
        let json = r#"{"id": 1, "use_case_name": "X", "status": "Paused"}"#;
        let row: InitiativeRow = serde_json::from_str(json).unwrap();

        let result = snapshot_from(row);
        assert!(matches!(result, Err(PortfolioError::InvalidResponse(_))));
    }

    #[test]
    fn metric_row_converts_readings() {
        let json = r#"{
            "metric_period": "2024-03",
            "additional_metrics": {
                "Hours Saved": {"value": 120, "comments": "Ramp month"},
                "Accuracy": {"value": "94.5", "comments": ""}
            },
            "modified_at": "2024-04-02T09:15:00Z"
        }"#;
        let row: MetricRow = serde_json::from_str(json).unwrap();

        let record = record_from(row).unwrap();
        assert_eq!(record.numeric_value("Hours Saved"), Some(120.0));
        assert_eq!(record.numeric_value("Accuracy"), Some(94.5));
        assert_eq!(
            record.reading("Hours Saved").and_then(|r| r.comment()),
            Some("Ramp month")
        );
        assert_eq!(record.reading("Accuracy").and_then(|r| r.comment()), None);
    }

    #[test]
    fn non_numeric_value_becomes_comment_only_reading() {
        let json = r#"{
            "metric_period": "2024-03",
            "additional_metrics": {
                "Adoption": {"value": "TBD", "comments": "Survey pending"}
            },
            "modified_at": "2024-04-02T09:15:00Z"
        }"#;
        let row: MetricRow = serde_json::from_str(json).unwrap();

        let record = record_from(row).unwrap();
        assert_eq!(record.numeric_value("Adoption"), None);
        assert_eq!(
            record.reading("Adoption").and_then(|r| r.comment()),
            Some("Survey pending")
        );
    }

    #[test]
    fn blank_metric_names_are_dropped() {
        let json = r#"{
            "metric_period": "2024-03",
            "additional_metrics": {
                "  ": {"value": 5, "comments": ""},
                "Hours Saved": {"value": 10, "comments": ""}
            },
            "modified_at": "2024-04-02T09:15:00Z"
        }"#;
        let row: MetricRow = serde_json::from_str(json).unwrap();

        let record = record_from(row).unwrap();
        assert_eq!(record.metric_names().count(), 1);
    }

    #[test]
    fn absent_metrics_map_yields_empty_record() {
        let json = r#"{"metric_period": "2024-03", "modified_at": "2024-04-02T09:15:00Z"}"#;
        let row: MetricRow = serde_json::from_str(json).unwrap();

        let record = record_from(row).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn naive_timestamp_is_read_as_utc() {
        let ts = parse_wire_timestamp("2024-04-02T09:15:00.123456").unwrap();
        assert_eq!(ts.year(), 2024);
    }

    #[test]
    fn unparseable_timestamp_fails_the_conversion() {
        let result = parse_wire_timestamp("last Tuesday");
        assert!(matches!(result, Err(PortfolioError::InvalidResponse(_))));
    }

    #[test]
    fn bad_period_fails_the_conversion() {
        let json = r#"{"metric_period": "March 2024", "modified_at": "2024-04-02T09:15:00Z"}"#;
        let row: MetricRow = serde_json::from_str(json).unwrap();

        let result = record_from(row);
        assert!(matches!(result, Err(PortfolioError::InvalidResponse(_))));
    }

    #[test]
    fn quantitative_catalog_row_infers_its_hint() {
        let json = r#"{
            "metric_name": "Hours Saved",
            "metric_description": "Monthly hours returned to the team",
            "metric_type": "quantitative",
            "unit_of_measure": "hours"
        }"#;
        let row: CustomMetricRow = serde_json::from_str(json).unwrap();

        let definition = definition_from(row).unwrap();
        assert_eq!(definition.aggregation(), AggregationHint::Sum);
        assert!(definition.is_quantitative());
    }

    #[test]
    fn quantitative_row_without_unit_is_dropped() {
        let json = r#"{
            "metric_name": "Hours Saved",
            "metric_type": "quantitative"
        }"#;
        let row: CustomMetricRow = serde_json::from_str(json).unwrap();

        assert!(definition_from(row).is_none());
    }

    #[test]
    fn non_quantitative_rows_are_qualitative() {
        let json = r#"{
            "metric_name": "User Sentiment",
            "metric_type": "qualitative"
        }"#;
        let row: CustomMetricRow = serde_json::from_str(json).unwrap();

        let definition = definition_from(row).unwrap();
        assert!(!definition.is_quantitative());
        assert_eq!(definition.aggregation(), AggregationHint::None);
    }
}
