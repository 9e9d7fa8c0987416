//! Tracker API Adapters.
//!
//! Implementations of the advisor, portfolio, and field-option ports
//! against the initiative tracker's REST API, plus in-memory stand-ins
//! for development and testing.
//!
//! ## Available Adapters
//!
//! - `ApiClient` - Shared HTTP client implementing all three ports
//! - `MockRecommendationClient` - Configurable advisor mock
//! - `InMemoryPortfolio` - Seeded portfolio for tests
//! - `StaticFieldOptions` - Fixed field option table

mod client;
mod field_options;
mod in_memory_portfolio;
mod mock_recommendation;
mod portfolio;
mod recommendation;
mod static_field_options;

pub use client::{ApiClient, ApiClientConfig, AttributionIdentity};
pub use in_memory_portfolio::InMemoryPortfolio;
pub use mock_recommendation::{AdvisorCall, MockAdvisorError, MockRecommendationClient};
pub use static_field_options::StaticFieldOptions;
