//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `api` - Tracker REST API clients (advisor, portfolio, field options)
//! - `storage` - Session storage (in-memory)

pub mod api;
pub mod storage;

pub use api::{
    ApiClient, ApiClientConfig, AttributionIdentity, InMemoryPortfolio, MockRecommendationClient,
    StaticFieldOptions,
};
pub use storage::InMemorySessionStore;
