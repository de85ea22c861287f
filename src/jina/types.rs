//! Request options and response records for the Jina APIs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format requested from the reader endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Text,
    Screenshot,
}

impl OutputFormat {
    /// Header value for `x-respond-with`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Screenshot => "screenshot",
        }
    }
}

/// Options for converting a webpage to text via the reader endpoint.
///
/// Also serves as the `read-webpage` tool parameter schema.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FetchOptions {
    /// URL of the webpage to read
    pub url: String,
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Generate alt text for images
    #[serde(default)]
    pub generate_alt: bool,
    /// Timeout in seconds, forwarded to the remote service
    pub timeout: Option<u64>,
    /// CSS selector to extract
    pub selector: Option<String>,
    /// Wait for a specific element before returning
    pub wait_for: Option<String>,
    /// Proxy server URL
    pub proxy: Option<String>,
}

impl FetchOptions {
    /// Options for a plain markdown fetch of `url`.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Options for a web search via the search endpoint.
///
/// Also serves as the `web-search` tool parameter schema.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchOptions {
    /// Search query
    pub query: String,
    /// Limit search to a specific domain
    pub site: Option<String>,
    /// Number of results to return (1-10)
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Whether to retain images in result content
    #[serde(default = "default_retain_images")]
    pub retain_images: bool,
}

fn default_max_results() -> u32 {
    5
}

fn default_retain_images() -> bool {
    true
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            site: None,
            max_results: default_max_results(),
            retain_images: default_retain_images(),
        }
    }
}

/// A webpage converted to text by the reader endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchedPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One search result, in the order returned by the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Reader response envelope: `{ "data": { title, content, description } }`
#[derive(Debug, Deserialize)]
pub(crate) struct ReaderResponse {
    #[serde(default)]
    pub data: Option<FetchedPage>,
}

/// Search response envelope: `{ "data": [ {url, title, content}, ... ] }`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchResultItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_options_deserialize_with_defaults() {
        let options: FetchOptions =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(options.url, "https://example.com");
        assert_eq!(options.format, OutputFormat::Markdown);
        assert!(!options.generate_alt);
        assert!(options.timeout.is_none());
    }

    #[test]
    fn fetch_options_format_is_lowercase_on_the_wire() {
        let options: FetchOptions =
            serde_json::from_str(r#"{"url": "https://example.com", "format": "screenshot"}"#)
                .unwrap();
        assert_eq!(options.format, OutputFormat::Screenshot);
        assert_eq!(options.format.as_str(), "screenshot");
    }

    #[test]
    fn search_options_defaults() {
        let options: SearchOptions = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();
        assert_eq!(options.max_results, 5);
        assert!(options.retain_images);
        assert!(options.site.is_none());
    }

    #[test]
    fn fetched_page_tolerates_missing_fields() {
        let page: FetchedPage = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(page.title, "T");
        assert_eq!(page.content, "");
        assert!(page.description.is_none());
    }

    #[test]
    fn search_response_missing_data_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
    }
}
