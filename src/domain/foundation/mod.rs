//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form
//! the vocabulary of the Initiative Compass domain.

mod errors;
mod ids;
mod period;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{InitiativeId, SessionId, SubmissionToken};
pub use period::MetricPeriod;
pub use timestamp::Timestamp;
