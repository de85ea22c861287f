//! HTTP client for the Jina reader and search endpoints

use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, warn};

use super::{
    config::JinaConfig,
    error::{JinaError, Result},
    types::{FetchOptions, FetchedPage, ReaderResponse, SearchOptions, SearchResponse, SearchResultItem},
};

/// Client for the Jina reader (`r.jina.ai`) and search (`s.jina.ai`) APIs.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared and safe for
/// concurrent use. Each call performs exactly one outbound request, no
/// retries.
#[derive(Clone)]
pub struct JinaClient {
    http: Client,
    config: std::sync::Arc<JinaConfig>,
}

impl JinaClient {
    /// Create a new client with the given configuration.
    ///
    /// No global timeout is set on the client: fetch timeouts are forwarded
    /// to the remote service via `x-timeout`, and search applies its fixed
    /// per-request timeout.
    pub fn new(config: JinaConfig) -> Result<Self> {
        let http = Client::builder().build().map_err(JinaError::Request)?;

        Ok(Self {
            http,
            config: std::sync::Arc::new(config),
        })
    }

    pub fn config(&self) -> &JinaConfig {
        &self.config
    }

    /// Convert a webpage to text via the reader endpoint.
    ///
    /// The target URL is appended verbatim after the reader base, and the
    /// formatting options travel as `x-*` request headers.
    pub async fn fetch(&self, options: &FetchOptions) -> Result<FetchedPage> {
        let url = format!("{}/{}", self.config.reader_base_url, options.url);
        debug!("fetching {}", url);

        let mut request = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header("x-respond-with", options.format.as_str());

        if options.generate_alt {
            request = request.header("x-with-generated-alt", "true");
        }
        if let Some(timeout) = options.timeout {
            request = request.header("x-timeout", timeout.to_string());
        }
        if let Some(selector) = &options.selector {
            request = request.header("x-target-selector", selector);
        }
        if let Some(wait_for) = &options.wait_for {
            request = request.header("x-wait-for-selector", wait_for);
        }
        if let Some(proxy) = &options.proxy {
            request = request.header("x-proxy-url", proxy);
        }

        let response = request.send().await?;
        let envelope: ReaderResponse = self.handle_response(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Search the web via the search endpoint.
    ///
    /// Requires an API key; its absence is reported before any request is
    /// made. Result order is preserved as returned by the service, and a
    /// missing or empty `data` array is an empty result set, not an error.
    pub async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchResultItem>> {
        let api_key = self.config.api_key.as_deref().ok_or(JinaError::MissingApiKey)?;

        let url = format!(
            "{}/{}",
            self.config.search_base_url,
            urlencoding::encode(&options.query)
        );
        debug!("searching {}", url);

        let mut request = self
            .http
            .get(&url)
            .timeout(self.config.search_timeout)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(api_key);

        if !options.retain_images {
            request = request.header("X-Retain-Images", "none");
        }
        if let Some(site) = &options.site {
            request = request.query(&[("site", site)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                JinaError::Timeout
            } else {
                JinaError::Request(e)
            }
        })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(JinaError::InvalidApiKey),
            StatusCode::FORBIDDEN => return Err(JinaError::AccessDenied),
            _ => {}
        }

        let envelope: SearchResponse = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Handle HTTP response and deserialize JSON or return error
    async fn handle_response<T: serde::de::DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            // A per-request timeout can also expire mid-body; that is still
            // a timeout, not a malformed response.
            response.json::<T>().await.map_err(|e| {
                if e.is_timeout() {
                    return JinaError::Timeout;
                }
                warn!("failed to parse response JSON: {}", e);
                JinaError::InvalidResponse(e.to_string())
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(JinaError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }
}
