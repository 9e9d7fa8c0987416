//! Cross-initiative monthly trend aggregation.
//!
//! Collapses every initiative's per-period records into one timeline:
//! for each period, how many initiatives reported and the combined
//! total/average/count per metric name.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::foundation::{InitiativeId, MetricPeriod};

use super::record::MetricPeriodRecord;

/// Combined figures for one metric in one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendMetric {
    pub total: f64,
    pub average: f64,
    pub count: usize,
}

/// One period on the portfolio-wide trend timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: MetricPeriod,
    /// Distinct initiatives that reported anything this period.
    pub active_initiatives: usize,
    pub metrics: BTreeMap<String, TrendMetric>,
}

/// Aggregates per-initiative record sets into an ascending timeline.
///
/// An initiative counts as active in a period as soon as it has a
/// record there, even if none of its readings carries a numeric value.
/// Totals and averages are rounded to 2 decimals for display; metrics
/// with no numeric value in a period are omitted from that point.
pub fn monthly_trends(
    record_sets: &[(InitiativeId, Vec<MetricPeriodRecord>)],
) -> Vec<TrendPoint> {
    struct Accumulator {
        initiatives: BTreeSet<InitiativeId>,
        totals: BTreeMap<String, (f64, usize)>,
    }

    let mut by_period: BTreeMap<MetricPeriod, Accumulator> = BTreeMap::new();

    for (initiative_id, records) in record_sets {
        for record in records {
            let entry = by_period.entry(record.period()).or_insert_with(|| Accumulator {
                initiatives: BTreeSet::new(),
                totals: BTreeMap::new(),
            });
            entry.initiatives.insert(*initiative_id);

            for (name, reading) in record.readings() {
                if let Some(value) = reading.value() {
                    let slot = entry.totals.entry(name.to_string()).or_insert((0.0, 0));
                    slot.0 += value;
                    slot.1 += 1;
                }
            }
        }
    }

    by_period
        .into_iter()
        .map(|(period, acc)| TrendPoint {
            period,
            active_initiatives: acc.initiatives.len(),
            metrics: acc
                .totals
                .into_iter()
                .map(|(name, (total, count))| {
                    let metric = TrendMetric {
                        total: round2(total),
                        average: round2(total / count as f64),
                        count,
                    };
                    (name, metric)
                })
                .collect(),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::metrics::record::MetricReading;

    fn record(period: &str, entries: &[(&str, f64)]) -> MetricPeriodRecord {
        let mut record =
            MetricPeriodRecord::new(period.parse().unwrap(), Timestamp::now());
        for (name, value) in entries {
            record
                .insert_reading(*name, MetricReading::numeric(*value))
                .unwrap();
        }
        record
    }

    #[test]
    fn combines_initiatives_reporting_the_same_period() {
        let sets = vec![
            (
                InitiativeId::new(1),
                vec![record("2024-01", &[("Cost Saved Rands", 100.0)])],
            ),
            (
                InitiativeId::new(2),
                vec![record("2024-01", &[("Cost Saved Rands", 300.0)])],
            ),
        ];

        let trends = monthly_trends(&sets);

        assert_eq!(trends.len(), 1);
        let point = &trends[0];
        assert_eq!(point.active_initiatives, 2);
        let metric = &point.metrics["Cost Saved Rands"];
        assert_eq!(metric.total, 400.0);
        assert_eq!(metric.average, 200.0);
        assert_eq!(metric.count, 2);
    }

    #[test]
    fn timeline_is_sorted_ascending() {
        let sets = vec![(
            InitiativeId::new(1),
            vec![
                record("2024-03", &[("Model Accuracy", 93.0)]),
                record("2024-01", &[("Model Accuracy", 90.0)]),
                record("2024-02", &[("Model Accuracy", 91.0)]),
            ],
        )];

        let trends = monthly_trends(&sets);

        let periods: Vec<String> = trends.iter().map(|p| p.period.to_string()).collect();
        assert_eq!(periods, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn totals_and_averages_round_to_two_decimals() {
        let sets = vec![
            (
                InitiativeId::new(1),
                vec![record("2024-01", &[("Model Accuracy", 0.1)])],
            ),
            (
                InitiativeId::new(2),
                vec![record("2024-01", &[("Model Accuracy", 0.2)])],
            ),
            (
                InitiativeId::new(3),
                vec![record("2024-01", &[("Model Accuracy", 0.2)])],
            ),
        ];

        let metric = &monthly_trends(&sets)[0].metrics["Model Accuracy"];
        assert_eq!(metric.total, 0.5);
        assert_eq!(metric.average, 0.17);
    }

    #[test]
    fn record_without_numeric_values_still_marks_the_initiative_active() {
        let mut comment_only =
            MetricPeriodRecord::new("2024-01".parse().unwrap(), Timestamp::now());
        comment_only
            .insert_reading(
                "Stakeholder Feedback",
                MetricReading::new(None, Some("kick-off month".to_string())),
            )
            .unwrap();

        let sets = vec![
            (InitiativeId::new(1), vec![comment_only]),
            (
                InitiativeId::new(2),
                vec![record("2024-01", &[("Model Accuracy", 90.0)])],
            ),
        ];

        let point = &monthly_trends(&sets)[0];
        assert_eq!(point.active_initiatives, 2);
        assert!(!point.metrics.contains_key("Stakeholder Feedback"));
        assert_eq!(point.metrics["Model Accuracy"].count, 1);
    }

    #[test]
    fn same_initiative_across_periods_counts_once_per_period() {
        let sets = vec![(
            InitiativeId::new(7),
            vec![
                record("2024-01", &[("Units Processed", 50.0)]),
                record("2024-02", &[("Units Processed", 75.0)]),
            ],
        )];

        let trends = monthly_trends(&sets);
        assert_eq!(trends.len(), 2);
        assert!(trends.iter().all(|p| p.active_initiatives == 1));
    }

    #[test]
    fn no_records_yields_an_empty_timeline() {
        assert!(monthly_trends(&[]).is_empty());
        assert!(monthly_trends(&[(InitiativeId::new(1), Vec::new())]).is_empty());
    }
}
