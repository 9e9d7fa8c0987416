//! GetMonthlyTrendsHandler - Portfolio-wide monthly reporting timeline.
//!
//! Fans out across the whole portfolio: every initiative's records are
//! loaded concurrently and collapsed into one ascending timeline of
//! active-initiative counts and combined metric figures.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::metrics::{monthly_trends, TrendPoint};
use crate::ports::{PortfolioError, PortfolioReader};

/// Query for the cross-initiative trend timeline.
#[derive(Debug, Clone, Default)]
pub struct GetMonthlyTrendsQuery;

/// Result: one point per period with records, ascending.
pub type GetMonthlyTrendsResult = Vec<TrendPoint>;

/// Handler aggregating the portfolio's monthly trends.
pub struct GetMonthlyTrendsHandler {
    portfolio: Arc<dyn PortfolioReader>,
}

impl GetMonthlyTrendsHandler {
    pub fn new(portfolio: Arc<dyn PortfolioReader>) -> Self {
        Self { portfolio }
    }

    pub async fn handle(
        &self,
        _query: GetMonthlyTrendsQuery,
    ) -> Result<GetMonthlyTrendsResult, PortfolioError> {
        // 1. List the portfolio
        let initiatives = self.portfolio.initiatives().await?;

        // 2. Load every initiative's records concurrently
        let record_sets = try_join_all(initiatives.iter().map(|initiative| async move {
            let records = self.portfolio.metrics_for(initiative.id).await?;
            Ok::<_, PortfolioError>((initiative.id, records))
        }))
        .await?;

        // 3. Collapse into one timeline
        Ok(monthly_trends(&record_sets))
    }
}
