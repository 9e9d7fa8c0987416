//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::assistant::{
    // Assistant flow handlers
    GetTranscriptHandler, GetTranscriptQuery, GetTranscriptResult,
    ResetSessionCommand, ResetSessionError, ResetSessionHandler, ResetSessionResult,
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
    SubmitAnswerCommand, SubmitAnswerConfig, SubmitAnswerError, SubmitAnswerHandler,
    SubmitAnswerResult,
};
pub use handlers::dashboard::{
    // Dashboard query handlers
    GetInitiativeMetricsHandler, GetInitiativeMetricsQuery, GetInitiativeMetricsResult,
    GetMonthlyTrendsHandler, GetMonthlyTrendsQuery, GetMonthlyTrendsResult,
    GetPortfolioStatsHandler, GetPortfolioStatsQuery, GetPortfolioStatsResult,
    ListFieldOptionsHandler, ListFieldOptionsQuery, ListFieldOptionsResult, MetricView,
};
