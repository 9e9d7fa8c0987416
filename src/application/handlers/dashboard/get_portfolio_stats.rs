//! GetPortfolioStatsHandler - Query handler for aggregate dashboard figures.
//!
//! Loads every initiative snapshot and derives the stat-card numbers:
//! status counts, mean completion, and category breakdowns, optionally
//! narrowed by the query's filters.

use std::sync::Arc;

use crate::domain::portfolio::{derive_stats, InitiativeStatus, PortfolioStats, StatsFilter};
use crate::ports::{PortfolioError, PortfolioReader};

/// Query for portfolio stats. All filters are optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct GetPortfolioStatsQuery {
    pub status: Option<InitiativeStatus>,
    pub department: Option<String>,
    pub initiative_type: Option<String>,
}

/// Result of a portfolio stats query.
pub type GetPortfolioStatsResult = PortfolioStats;

/// Handler deriving dashboard stats from the live portfolio.
pub struct GetPortfolioStatsHandler {
    portfolio: Arc<dyn PortfolioReader>,
}

impl GetPortfolioStatsHandler {
    pub fn new(portfolio: Arc<dyn PortfolioReader>) -> Self {
        Self { portfolio }
    }

    pub async fn handle(
        &self,
        query: GetPortfolioStatsQuery,
    ) -> Result<GetPortfolioStatsResult, PortfolioError> {
        // 1. Load every initiative snapshot
        let initiatives = self.portfolio.initiatives().await?;

        // 2. Derive the display figures under the query's filters
        let filter = StatsFilter {
            status: query.status,
            department: query.department,
            initiative_type: query.initiative_type,
        };
        Ok(derive_stats(&initiatives, &filter))
    }
}
