//! In-memory implementation of PortfolioReader for development and
//! testing.
//!
//! Seeded up front with snapshots, metric records, and a custom metric
//! catalog; every read returns clones of the seeded data. An outage
//! mode turns all reads into failures for resilience testing.
//!
//! # Usage
//!
//! ```ignore
//! let portfolio = InMemoryPortfolio::new()
//!     .with_initiative(snapshot)
//!     .with_records(snapshot.id, records);
//!
//! let all = portfolio.initiatives().await?;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::InitiativeId;
use crate::domain::metrics::{CustomMetricDefinition, MetricPeriodRecord};
use crate::domain::portfolio::InitiativeSnapshot;
use crate::ports::{PortfolioError, PortfolioReader};

/// In-memory portfolio seeded with fixed data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolio {
    snapshots: Vec<InitiativeSnapshot>,
    records: HashMap<InitiativeId, Vec<MetricPeriodRecord>>,
    catalog: Vec<CustomMetricDefinition>,
    /// When set, every read fails as unavailable with this message.
    outage: Option<String>,
}

impl InMemoryPortfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one initiative snapshot.
    pub fn with_initiative(mut self, snapshot: InitiativeSnapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }

    /// Sets the metric records for an initiative.
    pub fn with_records(
        mut self,
        initiative: InitiativeId,
        records: Vec<MetricPeriodRecord>,
    ) -> Self {
        self.records.insert(initiative, records);
        self
    }

    /// Adds one custom metric definition to the catalog.
    pub fn with_custom_metric(mut self, definition: CustomMetricDefinition) -> Self {
        self.catalog.push(definition);
        self
    }

    /// Makes every read fail as unavailable (for testing failure flows).
    pub fn with_outage(mut self, message: impl Into<String>) -> Self {
        self.outage = Some(message.into());
        self
    }

    fn check_outage(&self) -> Result<(), PortfolioError> {
        match &self.outage {
            Some(message) => Err(PortfolioError::unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PortfolioReader for InMemoryPortfolio {
    async fn initiatives(&self) -> Result<Vec<InitiativeSnapshot>, PortfolioError> {
        self.check_outage()?;
        Ok(self.snapshots.clone())
    }

    async fn metrics_for(
        &self,
        initiative: InitiativeId,
    ) -> Result<Vec<MetricPeriodRecord>, PortfolioError> {
        self.check_outage()?;
        if let Some(records) = self.records.get(&initiative) {
            return Ok(records.clone());
        }
        // A listed initiative that never reported has an empty history;
        // only an entirely unknown id is missing
        if self.snapshots.iter().any(|s| s.id == initiative) {
            return Ok(Vec::new());
        }
        Err(PortfolioError::NotFound(initiative))
    }

    async fn custom_metrics(&self) -> Result<Vec<CustomMetricDefinition>, PortfolioError> {
        self.check_outage()?;
        Ok(self.catalog.clone())
    }
}
