//! Built-in assistant flows.
//!
//! Provides the ROI Assistant and Complexity Analyzer scripts: the
//! transcript copy each flow opens, processes, and fails with, plus its
//! full question catalog. Flows are static configuration; sessions hold
//! a shared handle to one.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;

use super::catalog::QuestionCatalog;
use super::question::{QuestionDefinition, Successor};

/// Which advisor endpoint scores a completed flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorKind {
    Roi,
    Complexity,
}

/// A complete flow definition: copy plus question catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowScript {
    name: String,
    advisor: AdvisorKind,
    welcome: String,
    processing: String,
    failure: String,
    catalog: QuestionCatalog,
}

impl FlowScript {
    /// Builds a flow script.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any copy string is empty after
    /// trimming.
    pub fn try_new(
        name: impl Into<String>,
        advisor: AdvisorKind,
        welcome: impl Into<String>,
        processing: impl Into<String>,
        failure: impl Into<String>,
        catalog: QuestionCatalog,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let welcome = welcome.into();
        let processing = processing.into();
        let failure = failure.into();

        for (field, value) in [
            ("name", &name),
            ("welcome", &welcome),
            ("processing", &processing),
            ("failure", &failure),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(Self {
            name,
            advisor,
            welcome,
            processing,
            failure,
            catalog,
        })
    }

    /// Human-readable flow name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which advisor endpoint scores this flow once every field is answered.
    pub fn advisor(&self) -> AdvisorKind {
        self.advisor
    }

    /// Greeting appended as the first seed turn.
    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    /// Interstitial shown while the terminal call is in flight.
    pub fn processing(&self) -> &str {
        &self.processing
    }

    /// Error copy appended when the terminal call fails.
    pub fn failure(&self) -> &str {
        &self.failure
    }

    /// The flow's question catalog.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }
}

/// The ROI Assistant flow.
pub fn roi_assistant() -> Arc<FlowScript> {
    Arc::clone(&ROI_ASSISTANT)
}

/// The Complexity Analyzer flow.
pub fn complexity_analyzer() -> Arc<FlowScript> {
    Arc::clone(&COMPLEXITY_ANALYZER)
}

static ROI_ASSISTANT: Lazy<Arc<FlowScript>> = Lazy::new(|| {
    Arc::new(
        FlowScript::try_new(
            "ROI Assistant",
            AdvisorKind::Roi,
            ROI_WELCOME,
            ROI_PROCESSING,
            ROI_FAILURE,
            roi_catalog(),
        )
        .expect("ROI Assistant flow definition is valid"),
    )
});

static COMPLEXITY_ANALYZER: Lazy<Arc<FlowScript>> = Lazy::new(|| {
    Arc::new(
        FlowScript::try_new(
            "Complexity Analyzer",
            AdvisorKind::Complexity,
            COMPLEXITY_WELCOME,
            COMPLEXITY_PROCESSING,
            COMPLEXITY_FAILURE,
            complexity_catalog(),
        )
        .expect("Complexity Analyzer flow definition is valid"),
    )
});

// ============================================================================
// Flow Copy
// ============================================================================

const ROI_WELCOME: &str = "Welcome to the ROI Assistant. I will help you determine the right metrics to measure the return on investment for your initiative.";

const ROI_PROCESSING: &str = "Thank you for providing all the information. Let me analyze your responses and prepare recommendations...";

const ROI_FAILURE: &str =
    "I apologize, but I encountered an error while generating recommendations. Please try again.";

const COMPLEXITY_WELCOME: &str = "Welcome to the Complexity Analyzer. I will help you assess the complexity of your AI initiative and provide guidance on next steps.";

const COMPLEXITY_PROCESSING: &str = "Thank you for providing all the information. Let me analyze the complexity and prepare recommendations...";

const COMPLEXITY_FAILURE: &str =
    "I apologize, but I encountered an error while analyzing complexity. Please try again.";

// ============================================================================
// Question Catalogs
// ============================================================================

fn roi_catalog() -> QuestionCatalog {
    let questions = vec![
        choice(
            "initiative_type",
            "What type of initiative are you planning to implement?",
            vec!["AI Initiative", "RPA Initiative"],
            next("value_type"),
        ),
        choice(
            "value_type",
            "What type of value will this initiative primarily add?",
            vec![
                "Time Saving",
                "Cost Reduction",
                "Revenue Generation",
                "Productivity Enhancement",
                "Customer Experience Improvement",
                "Risk Mitigation",
                "Compliance & Governance",
                "Multiple Value Types",
            ],
            next("scale"),
        ),
        choice(
            "scale",
            "What is the expected scale of implementation?",
            vec![
                "Pilot (Single department/process)",
                "Medium (Multiple departments)",
                "Enterprise-wide (Organization-wide)",
            ],
            next("units_processed"),
        ),
        choice(
            "units_processed",
            "Approximately how many units/transactions will be processed per month?",
            vec![
                "Less than 100",
                "100 - 1,000",
                "1,000 - 10,000",
                "10,000 - 100,000",
                "More than 100,000",
            ],
            next("current_process"),
        ),
        choice(
            "current_process",
            "How is this process currently being handled?",
            vec![
                "Fully Manual",
                "Partially Automated",
                "Legacy System",
                "No Current Process (New Capability)",
            ],
            next("success_metrics"),
        ),
        choice(
            "success_metrics",
            "How will you measure success for this initiative?",
            vec![
                "Quantitative Metrics Only",
                "Qualitative Metrics Only",
                "Both Quantitative and Qualitative",
            ],
            next("timeline"),
        ),
        choice(
            "timeline",
            "What is your expected timeline to see ROI results?",
            vec![
                "Immediate (Within 1 month)",
                "Short-term (1-3 months)",
                "Medium-term (3-6 months)",
                "Long-term (6-12 months)",
                "Extended (More than 12 months)",
            ],
            next("industry_specifics"),
        ),
        choice(
            "industry_specifics",
            "Are there specific insurance industry challenges this initiative addresses?",
            vec![
                "Claims Processing",
                "Underwriting & Risk Assessment",
                "Customer Onboarding",
                "Fraud Detection",
                "Policy Administration",
                "Customer Service & Support",
                "Regulatory Compliance",
                "Data Quality & Management",
                "Other/Multiple Areas",
            ],
            Successor::Terminal,
        ),
    ];

    QuestionCatalog::try_new(questions).expect("ROI Assistant catalog is valid")
}

fn complexity_catalog() -> QuestionCatalog {
    let questions = vec![
        QuestionDefinition::free_text(
            "initiative_name",
            "What is the name of the AI initiative you want to analyze?",
            next("business_case_clarity"),
        )
        .expect("Complexity Analyzer question is valid"),
        choice(
            "business_case_clarity",
            "How clear is the business case and expected value?",
            vec![
                "Very clear with quantified benefits",
                "Moderately clear",
                "Somewhat unclear",
                "Needs significant work",
            ],
            next("data_availability"),
        ),
        choice(
            "data_availability",
            "What is the level of data availability for this initiative?",
            vec![
                "Readily available and accessible",
                "Available but needs gathering",
                "Partially available",
                "Not available yet",
            ],
            next("data_quality"),
        ),
        choice(
            "data_quality",
            "What is the current data quality status?",
            vec![
                "High quality and clean",
                "Moderate quality",
                "Poor quality, needs cleaning",
                "Unknown or unassessed",
            ],
            next("infrastructure_readiness"),
        ),
        choice(
            "infrastructure_readiness",
            "How ready is your technical infrastructure (compute, storage, tools)?",
            vec![
                "Fully ready",
                "Mostly ready, minor gaps",
                "Significant gaps exist",
                "Not ready, needs build-out",
            ],
            next("stakeholder_buyin"),
        ),
        choice(
            "stakeholder_buyin",
            "What is the level of stakeholder buy-in and executive support?",
            vec![
                "Strong support from all levels",
                "Moderate support",
                "Limited support",
                "No support secured yet",
            ],
            next("budget_availability"),
        ),
        choice(
            "budget_availability",
            "What is the budget status for this initiative?",
            vec![
                "Approved and allocated",
                "Budget requested pending approval",
                "Budget uncertain",
                "No budget identified",
            ],
            next("regulatory_compliance"),
        ),
        choice(
            "regulatory_compliance",
            "What is the regulatory and compliance risk level?",
            vec![
                "Low risk, compliant",
                "Moderate risk, manageable",
                "High risk, needs review",
                "Very high risk or unknown",
            ],
            next("integration_complexity"),
        ),
        choice(
            "integration_complexity",
            "How complex is the integration with existing systems?",
            vec![
                "Simple, minimal integration",
                "Moderate complexity",
                "Complex, multiple systems",
                "Very complex, enterprise-wide",
            ],
            next("technology_maturity"),
        ),
        choice(
            "technology_maturity",
            "How mature is the AI technology you plan to use?",
            vec![
                "Proven and widely adopted",
                "Established but evolving",
                "Emerging technology",
                "Experimental or cutting-edge",
            ],
            next("change_management"),
        ),
        choice(
            "change_management",
            "How prepared is the organization for the change this will bring?",
            vec![
                "Highly prepared with change plan",
                "Moderately prepared",
                "Limited preparation",
                "Not prepared",
            ],
            next("data_governance"),
        ),
        choice(
            "data_governance",
            "What is the state of data governance and privacy controls?",
            vec![
                "Strong governance in place",
                "Adequate governance",
                "Weak governance",
                "No governance established",
            ],
            next("expected_timeline"),
        ),
        choice(
            "expected_timeline",
            "What is your expected implementation timeline?",
            vec!["Under 3 months", "3-6 months", "6-12 months", "Over 12 months"],
            next("team_availability"),
        ),
        choice(
            "team_availability",
            "What is the availability of required team resources?",
            vec![
                "Team fully allocated",
                "Team mostly available",
                "Limited availability",
                "Team not identified",
            ],
            Successor::Terminal,
        ),
    ];

    QuestionCatalog::try_new(questions).expect("Complexity Analyzer catalog is valid")
}

fn choice(
    field: &str,
    prompt: &str,
    choices: Vec<&str>,
    successor: Successor,
) -> QuestionDefinition {
    QuestionDefinition::single_choice(field, prompt, choices, successor)
        .expect("built-in question is valid")
}

fn next(field: &str) -> Successor {
    Successor::Always(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::question::InputKind;

    #[test]
    fn roi_flow_has_eight_questions() {
        let flow = roi_assistant();
        assert_eq!(flow.catalog().len(), 8);
        assert_eq!(flow.catalog().first().field(), "initiative_type");
    }

    #[test]
    fn roi_questions_are_all_single_choice() {
        let flow = roi_assistant();
        assert!(flow
            .catalog()
            .iter()
            .all(|q| q.kind() == InputKind::SingleChoice));
    }

    #[test]
    fn roi_chain_visits_every_question_once() {
        let flow = roi_assistant();
        let catalog = flow.catalog();

        let mut visited = vec![catalog.first().field().to_string()];
        let mut index = 0;
        loop {
            let question = catalog.get(index).unwrap();
            let answer = &question.choices()[0];
            match catalog.next_after(index, answer) {
                Some((next_index, next_question)) => {
                    visited.push(next_question.field().to_string());
                    index = next_index;
                }
                None => break,
            }
        }

        assert_eq!(visited.len(), 8);
        assert_eq!(visited.last().unwrap(), "industry_specifics");
    }

    #[test]
    fn complexity_flow_has_fourteen_questions() {
        let flow = complexity_analyzer();
        assert_eq!(flow.catalog().len(), 14);
    }

    #[test]
    fn complexity_flow_opens_with_free_text_name() {
        let flow = complexity_analyzer();
        let first = flow.catalog().first();
        assert_eq!(first.field(), "initiative_name");
        assert_eq!(first.kind(), InputKind::FreeText);
        assert!(first.choices().is_empty());
    }

    #[test]
    fn complexity_choice_questions_offer_four_options() {
        let flow = complexity_analyzer();
        assert!(flow
            .catalog()
            .iter()
            .skip(1)
            .all(|q| q.choices().len() == 4));
    }

    #[test]
    fn welcome_copy_matches_shipped_flows() {
        assert!(roi_assistant().welcome().starts_with("Welcome to the ROI Assistant."));
        assert!(complexity_analyzer()
            .welcome()
            .starts_with("Welcome to the Complexity Analyzer."));
    }

    #[test]
    fn flow_script_rejects_blank_copy() {
        let result = FlowScript::try_new(
            "Flow",
            AdvisorKind::Roi,
            " ",
            "Processing...",
            "Failed.",
            roi_catalog(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn shipped_flows_route_to_their_advisors() {
        assert_eq!(roi_assistant().advisor(), AdvisorKind::Roi);
        assert_eq!(complexity_analyzer().advisor(), AdvisorKind::Complexity);
    }
}
