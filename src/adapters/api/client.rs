//! Shared HTTP client for the initiative tracker API.
//!
//! All tracker endpoints hang off one base URL, so the advisor,
//! portfolio, and field-option adapters share a single configured
//! client rather than each building their own.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiClientConfig::new("https://tracker.internal")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_attribution(AttributionIdentity::new("Jane Doe", "jane@example.com"));
//!
//! let client = ApiClient::new(config);
//! ```

use reqwest::Client;
use std::time::Duration;

/// Identity attached to writes against the tracker API.
///
/// Read paths never transmit it; it rides along so composed clients can
/// attribute any future write traffic without replumbing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionIdentity {
    /// Display name recorded in `created_by` / `modified_by` fields.
    pub name: String,
    /// Email recorded alongside the name.
    pub email: String,
}

impl AttributionIdentity {
    /// Creates an identity from a name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The fixed identity used outside production deployments.
    pub fn test_user() -> Self {
        Self::new("Tester", "test@tester.com")
    }
}

/// Configuration for the tracker API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the tracker deployment (no `/api` suffix).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Identity used to attribute writes.
    pub attribution: AttributionIdentity,
}

impl ApiClientConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            attribution: AttributionIdentity::test_user(),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the attribution identity.
    pub fn with_attribution(mut self, attribution: AttributionIdentity) -> Self {
        self.attribution = attribution;
        self
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

/// HTTP client for the initiative tracker API.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    client: Client,
}

impl ApiClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: ApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds a full endpoint URL under the tracker's `/api` prefix.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Returns the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Returns the configured timeout in whole seconds.
    pub(crate) fn timeout_secs(&self) -> u64 {
        self.config.timeout.as_secs()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiClientConfig::default())
    }
}
