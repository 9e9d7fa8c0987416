//! Dashboard query handlers.
//!
//! Read-only handlers shaping the portfolio for display.

mod get_initiative_metrics;
mod get_monthly_trends;
mod get_portfolio_stats;
mod list_field_options;

pub use get_initiative_metrics::{
    GetInitiativeMetricsHandler, GetInitiativeMetricsQuery, GetInitiativeMetricsResult, MetricView,
};
pub use get_monthly_trends::{
    GetMonthlyTrendsHandler, GetMonthlyTrendsQuery, GetMonthlyTrendsResult,
};
pub use get_portfolio_stats::{
    GetPortfolioStatsHandler, GetPortfolioStatsQuery, GetPortfolioStatsResult,
};
pub use list_field_options::{
    ListFieldOptionsHandler, ListFieldOptionsQuery, ListFieldOptionsResult,
};
