//! Metric period value object.
//!
//! Represents the calendar month a metric record belongs to.
//! Format: YYYY-MM (e.g., 2024-03)

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated metric period.
///
/// Metric records are keyed by the calendar month they cover; the
/// external API transports the key as a `YYYY-MM` string. Ordering is
/// chronological (year first, then month).
///
/// # Example
///
/// ```ignore
/// let period = MetricPeriod::try_new("2024-03")?;
/// assert_eq!(period.year(), 2024);
/// assert_eq!(period.month(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MetricPeriod {
    year: i32,
    month: u32,
}

impl MetricPeriod {
    /// Creates a new MetricPeriod from a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - The string is empty
    /// - The string is not exactly `YYYY-MM`
    /// - The month is outside 1-12
    pub fn try_new(s: &str) -> Result<Self, ValidationError> {
        // 1. Check not empty
        if s.is_empty() {
            return Err(ValidationError::empty_field("metric_period"));
        }

        // 2. Split on hyphen
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 || parts[0].len() != 4 || parts[1].len() != 2 {
            return Err(ValidationError::invalid_format(
                "metric_period",
                format!("expected format YYYY-MM, got '{}'", s),
            ));
        }

        // 3. Parse both components as numbers
        let year: i32 = parts[0].parse().map_err(|_| {
            ValidationError::invalid_format("metric_period", "year is not numeric")
        })?;
        let month: u32 = parts[1].parse().map_err(|_| {
            ValidationError::invalid_format("metric_period", "month is not numeric")
        })?;

        // 4. Validate month range
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range(
                "metric_period_month",
                1,
                12,
                month as i32,
            ));
        }

        Ok(Self { year, month })
    }

    /// Creates a MetricPeriod from already-validated parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the month is outside 1-12.
    pub fn from_parts(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range(
                "metric_period_month",
                1,
                12,
                month as i32,
            ));
        }
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MetricPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MetricPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<&str> for MetricPeriod {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<String> for MetricPeriod {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<MetricPeriod> for String {
    fn from(period: MetricPeriod) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_period_parses_successfully() {
        let period = MetricPeriod::try_new("2024-03").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 3);
        assert_eq!(period.to_string(), "2024-03");
    }

    #[test]
    fn december_parses_successfully() {
        let period = MetricPeriod::try_new("2023-12").unwrap();
        assert_eq!(period.month(), 12);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(matches!(
            MetricPeriod::try_new(""),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn missing_month_is_rejected() {
        assert!(MetricPeriod::try_new("2024").is_err());
    }

    #[test]
    fn single_digit_month_is_rejected() {
        // The API always zero-pads months
        assert!(MetricPeriod::try_new("2024-3").is_err());
    }

    #[test]
    fn month_zero_is_rejected() {
        assert!(matches!(
            MetricPeriod::try_new("2024-00"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn month_thirteen_is_rejected() {
        assert!(MetricPeriod::try_new("2024-13").is_err());
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        assert!(MetricPeriod::try_new("abcd-03").is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let jan = MetricPeriod::try_new("2024-01").unwrap();
        let feb = MetricPeriod::try_new("2024-02").unwrap();
        let prev_dec = MetricPeriod::try_new("2023-12").unwrap();

        assert!(jan < feb);
        assert!(prev_dec < jan);
    }

    #[test]
    fn serializes_as_period_string() {
        let period = MetricPeriod::try_new("2024-03").unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-03\"");
    }

    #[test]
    fn deserializes_from_period_string() {
        let period: MetricPeriod = serde_json::from_str("\"2024-11\"").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 11);
    }

    #[test]
    fn deserialization_rejects_malformed_string() {
        let result: Result<MetricPeriod, _> = serde_json::from_str("\"2024/11\"");
        assert!(result.is_err());
    }

    #[test]
    fn from_parts_validates_month() {
        assert!(MetricPeriod::from_parts(2024, 6).is_ok());
        assert!(MetricPeriod::from_parts(2024, 0).is_err());
        assert!(MetricPeriod::from_parts(2024, 13).is_err());
    }
}
