#[cfg(test)]
mod tests {
    use crate::domain::foundation::InitiativeId;
    use crate::domain::portfolio::initiative::{InitiativeSnapshot, InitiativeStatus};
    use crate::domain::portfolio::stats::*;

    fn snapshot(
        id: i64,
        status: InitiativeStatus,
        departments: &[&str],
        benefit: Option<&str>,
        initiative_type: &str,
        percentage_complete: f64,
    ) -> InitiativeSnapshot {
        InitiativeSnapshot {
            id: InitiativeId::new(id),
            name: format!("Initiative {}", id),
            status,
            departments: departments.iter().map(|d| d.to_string()).collect(),
            benefit: benefit.map(|b| b.to_string()),
            initiative_type: Some(initiative_type.to_string()),
            percentage_complete,
        }
    }

    fn sample_portfolio() -> Vec<InitiativeSnapshot> {
        vec![
            snapshot(
                1,
                InitiativeStatus::InProgress,
                &["Claims", "Finance"],
                Some("Cost Reduction"),
                "AI Initiative",
                60.0,
            ),
            snapshot(
                2,
                InitiativeStatus::Ideation,
                &["Claims"],
                Some("Cost Reduction"),
                "RPA Initiative",
                10.0,
            ),
            snapshot(
                3,
                InitiativeStatus::LiveComplete,
                &["Underwriting"],
                Some("Revenue Growth"),
                "AI Initiative",
                100.0,
            ),
            snapshot(
                4,
                InitiativeStatus::InProgress,
                &["Claims"],
                None,
                "AI Initiative",
                45.0,
            ),
        ]
    }

    #[test]
    fn counts_every_status_bucket() {
        let stats = derive_stats(&sample_portfolio(), &StatsFilter::default());

        assert_eq!(stats.total_initiatives, 4);
        assert_eq!(stats.ideation_count, 1);
        assert_eq!(stats.in_progress_count, 2);
        assert_eq!(stats.completed_count, 1);
    }

    #[test]
    fn average_completion_rounds_to_one_decimal() {
        let stats = derive_stats(&sample_portfolio(), &StatsFilter::default());
        // (60 + 10 + 100 + 45) / 4 = 53.75 -> 53.8
        assert_eq!(stats.avg_completion, 53.8);
    }

    #[test]
    fn empty_portfolio_derives_all_zeros() {
        let stats = derive_stats(&[], &StatsFilter::default());

        assert_eq!(stats.total_initiatives, 0);
        assert_eq!(stats.avg_completion, 0.0);
        assert!(stats.by_department.is_empty());
        assert!(stats.by_benefit.is_empty());
    }

    #[test]
    fn departments_count_once_per_membership() {
        let stats = derive_stats(&sample_portfolio(), &StatsFilter::default());

        assert_eq!(stats.by_department[0].label, "Claims");
        assert_eq!(stats.by_department[0].count, 3);
        let finance = stats
            .by_department
            .iter()
            .find(|c| c.label == "Finance")
            .unwrap();
        assert_eq!(finance.count, 1);
    }

    #[test]
    fn category_ties_break_alphabetically() {
        let stats = derive_stats(&sample_portfolio(), &StatsFilter::default());

        let labels: Vec<&str> = stats
            .by_department
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Claims", "Finance", "Underwriting"]);
    }

    #[test]
    fn initiatives_without_a_benefit_are_not_counted() {
        let stats = derive_stats(&sample_portfolio(), &StatsFilter::default());

        let total_benefit_count: usize = stats.by_benefit.iter().map(|c| c.count).sum();
        assert_eq!(total_benefit_count, 3);
        assert_eq!(stats.by_benefit[0].label, "Cost Reduction");
        assert_eq!(stats.by_benefit[0].count, 2);
    }

    #[test]
    fn status_filter_narrows_every_figure() {
        let filter = StatsFilter {
            status: Some(InitiativeStatus::InProgress),
            ..StatsFilter::default()
        };
        let stats = derive_stats(&sample_portfolio(), &filter);

        assert_eq!(stats.total_initiatives, 2);
        assert_eq!(stats.ideation_count, 0);
        assert_eq!(stats.avg_completion, 52.5);
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = StatsFilter {
            status: Some(InitiativeStatus::InProgress),
            department: Some("Claims".to_string()),
            initiative_type: Some("AI Initiative".to_string()),
        };
        let stats = derive_stats(&sample_portfolio(), &filter);

        assert_eq!(stats.total_initiatives, 2);

        let filter = StatsFilter {
            status: Some(InitiativeStatus::InProgress),
            department: Some("Underwriting".to_string()),
            initiative_type: Some("AI Initiative".to_string()),
        };
        assert_eq!(derive_stats(&sample_portfolio(), &filter).total_initiatives, 0);
    }

    #[test]
    fn department_filter_matches_any_membership() {
        let filter = StatsFilter {
            department: Some("Finance".to_string()),
            ..StatsFilter::default()
        };
        let stats = derive_stats(&sample_portfolio(), &filter);

        assert_eq!(stats.total_initiatives, 1);
        assert_eq!(stats.in_progress_count, 1);
    }
}
