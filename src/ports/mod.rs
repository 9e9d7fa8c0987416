//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Advisory Ports
//!
//! - `RecommendationClient` - Terminal advisory call for completed flows
//!
//! ## Portfolio Ports
//!
//! - `PortfolioReader` - Read-only access to initiatives and metrics
//! - `FieldOptionProvider` - Operator-maintained dropdown values
//!
//! ## Session Ports
//!
//! - `SessionStore` - Active questionnaire sessions, in memory

mod field_options;
mod portfolio;
mod recommendation;
mod session_store;

pub use field_options::{FieldOption, FieldOptionError, FieldOptionProvider};
pub use portfolio::{PortfolioError, PortfolioReader};
pub use recommendation::{RecommendationClient, RecommendationError};
pub use session_store::{SessionStore, SessionStoreError};
