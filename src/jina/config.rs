//! Configuration for the Jina HTTP client

use std::time::Duration;

/// Default base URL of the reader (webpage-to-text) endpoint.
pub const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai";

/// Default base URL of the search endpoint.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://s.jina.ai";

/// Environment variable holding the search API credential.
pub const API_KEY_ENV: &str = "JINA_API_KEY";

/// Configuration for the Jina client.
///
/// Constructed once at startup and shared read-only across invocations.
/// The base URLs are overridable so tests can point the client at a mock
/// server.
#[derive(Debug, Clone)]
pub struct JinaConfig {
    /// API credential for the search endpoint. Fetching pages does not
    /// require a key; searching does.
    pub api_key: Option<String>,
    /// Base URL of the reader endpoint
    pub reader_base_url: String,
    /// Base URL of the search endpoint
    pub search_base_url: String,
    /// Fixed per-request timeout applied to search calls
    pub search_timeout: Duration,
}

impl Default for JinaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            reader_base_url: DEFAULT_READER_BASE_URL.to_string(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            search_timeout: Duration::from_secs(30),
        }
    }
}

impl JinaConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing or empty `JINA_API_KEY` leaves `api_key` unset; the error
    /// surfaces only when a search is attempted.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }
}
