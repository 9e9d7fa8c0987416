use std::collections::BTreeMap;

use serde::Serialize;

use super::initiative::{InitiativeSnapshot, InitiativeStatus};

/// Optional filters applied before deriving stats. All present filters
/// must match (conjunctive).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsFilter {
    pub status: Option<InitiativeStatus>,
    pub department: Option<String>,
    pub initiative_type: Option<String>,
}

impl StatsFilter {
    pub fn matches(&self, initiative: &InitiativeSnapshot) -> bool {
        if let Some(status) = self.status {
            if initiative.status != status {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if !initiative.departments.iter().any(|d| d == department) {
                return false;
            }
        }
        if let Some(initiative_type) = &self.initiative_type {
            if initiative.initiative_type.as_deref() != Some(initiative_type.as_str()) {
                return false;
            }
        }
        true
    }
}

/// How many initiatives share one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Aggregate portfolio figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_initiatives: usize,
    pub ideation_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    /// Mean percentage complete, rounded to one decimal. Zero for an
    /// empty portfolio.
    pub avg_completion: f64,
    /// Department counts, most common first.
    pub by_department: Vec<CategoryCount>,
    /// Benefit-category counts, most common first. Initiatives without
    /// a benefit are not represented.
    pub by_benefit: Vec<CategoryCount>,
}

/// Derives dashboard stats from initiative snapshots.
///
/// Pure and display-oriented: the input is never mutated, an initiative
/// spanning several departments counts once per department, and ties in
/// category counts break alphabetically for stable output.
pub fn derive_stats(initiatives: &[InitiativeSnapshot], filter: &StatsFilter) -> PortfolioStats {
    let filtered: Vec<&InitiativeSnapshot> = initiatives
        .iter()
        .filter(|initiative| filter.matches(initiative))
        .collect();

    let total_initiatives = filtered.len();
    let mut ideation_count = 0;
    let mut in_progress_count = 0;
    let mut completed_count = 0;
    let mut completion_sum = 0.0;

    for initiative in &filtered {
        match initiative.status {
            InitiativeStatus::Ideation => ideation_count += 1,
            InitiativeStatus::InProgress => in_progress_count += 1,
            InitiativeStatus::LiveComplete => completed_count += 1,
        }
        completion_sum += initiative.percentage_complete;
    }

    let avg_completion = if total_initiatives == 0 {
        0.0
    } else {
        round1(completion_sum / total_initiatives as f64)
    };

    let by_department = count_categories(
        filtered
            .iter()
            .flat_map(|initiative| initiative.departments.iter().map(String::as_str)),
    );
    let by_benefit = count_categories(
        filtered
            .iter()
            .filter_map(|initiative| initiative.benefit.as_deref()),
    );

    PortfolioStats {
        total_initiatives,
        ideation_count,
        in_progress_count,
        completed_count,
        avg_completion,
        by_department,
        by_benefit,
    }
}

fn count_categories<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields labels alphabetically; a stable sort on
    // count keeps that order within ties
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
