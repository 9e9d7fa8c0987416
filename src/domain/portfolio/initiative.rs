use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{InitiativeId, ValidationError};

/// Delivery status of an initiative, matching the portfolio API's
/// display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiativeStatus {
    Ideation,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Live (Complete)")]
    LiveComplete,
}

impl InitiativeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitiativeStatus::Ideation => "Ideation",
            InitiativeStatus::InProgress => "In Progress",
            InitiativeStatus::LiveComplete => "Live (Complete)",
        }
    }
}

impl fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InitiativeStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Ideation" => Ok(InitiativeStatus::Ideation),
            "In Progress" => Ok(InitiativeStatus::InProgress),
            "Live (Complete)" => Ok(InitiativeStatus::LiveComplete),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown initiative status '{}'", other),
            )),
        }
    }
}

/// A read-only snapshot of one initiative as reported by the portfolio
/// API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeSnapshot {
    pub id: InitiativeId,
    pub name: String,
    pub status: InitiativeStatus,
    pub departments: Vec<String>,
    pub benefit: Option<String>,
    pub initiative_type: Option<String>,
    pub percentage_complete: f64,
}
