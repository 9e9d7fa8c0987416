//! Field option endpoint of the tracker API.
//!
//! Implements the FieldOptionProvider port over the `field-options`
//! GET endpoint. The tracker already orders options for display; the
//! adapter re-sorts after conversion so callers always receive the
//! documented ordering.

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

use crate::ports::{FieldOption, FieldOptionError, FieldOptionProvider};

use super::client::ApiClient;

impl ApiClient {
    /// Parses the response status and handles errors.
    async fn options_status(&self, response: Response) -> Result<Response, FieldOptionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(FieldOptionError::api(status.as_u16(), error_body))
    }
}

#[async_trait]
impl FieldOptionProvider for ApiClient {
    async fn options_for(&self, field_name: &str) -> Result<Vec<FieldOption>, FieldOptionError> {
        let response = self
            .http()
            .get(self.endpoint("field-options"))
            .query(&[("field_name", field_name)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FieldOptionError::network(format!(
                        "Request timed out after {}s",
                        self.timeout_secs()
                    ))
                } else if e.is_connect() {
                    FieldOptionError::network(format!("Connection failed: {}", e))
                } else {
                    FieldOptionError::network(e.to_string())
                }
            })?;
        let response = self.options_status(response).await?;

        let rows: Vec<OptionRow> = response.json().await.map_err(|e| {
            FieldOptionError::invalid_response(format!("Failed to parse response: {}", e))
        })?;

        let mut options: Vec<FieldOption> = rows
            .into_iter()
            .map(|row| FieldOption {
                id: row.id,
                option_value: row.option_value,
                display_order: row.display_order,
            })
            .collect();
        FieldOption::display_sort(&mut options);

        Ok(options)
    }
}

// ----- Tracker API Types -----

#[derive(Debug, Deserialize)]
struct OptionRow {
    id: i64,
    option_value: String,
    #[serde(default)]
    display_order: i32,
}
