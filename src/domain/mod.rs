//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Guided advisory flows, transcripts, and sessions
//! - `metrics` - Metric readings, aggregation windows, and trend math
//! - `portfolio` - Initiative snapshots and portfolio statistics

pub mod foundation;
pub mod metrics;
pub mod portfolio;
pub mod questionnaire;
