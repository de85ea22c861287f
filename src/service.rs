//! rmcp-based MCP service layer.
//!
//! Exposes the Jina client as the `read-webpage` and `web-search` tools, the
//! `fetch` and `search` prompts, and the `webpage://` resource. Remote
//! failures inside the two named tools (and the prompts built on them) are
//! resolved into text tool results so the calling agent always receives
//! something it can display; resource reads and unknown names propagate as
//! protocol-level errors.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::*,
    service::{RequestContext, RoleServer},
    tool, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::format::{format_page, format_search_results};
use crate::jina::{FetchOptions, JinaClient, JinaConfig, SearchOptions};

/// URI scheme recognized by the resource reader.
const URI_SCHEME: &str = "webpage://";

/// Path prefix carrying a percent-encoded target URL.
const CONTENT_PREFIX: &str = "content/";

/// Fallback page served for `webpage://` URIs without a content path.
const DEFAULT_RESOURCE_URL: &str = "https://docs.jina.ai";

/// Jina reader MCP service.
#[derive(Clone)]
pub struct JinaReaderService {
    client: JinaClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JinaReaderService {
    /// Create a service from configuration.
    pub fn new(config: JinaConfig) -> crate::jina::Result<Self> {
        Ok(Self {
            client: JinaClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    pub fn client(&self) -> &JinaClient {
        &self.client
    }

    /// Convert a webpage to LLM-friendly text.
    #[tool(
        name = "read-webpage",
        description = "Convert webpage content to LLM-friendly format"
    )]
    pub async fn read_webpage(
        &self,
        Parameters(options): Parameters<FetchOptions>,
    ) -> Result<CallToolResult, McpError> {
        if options.url.trim().is_empty() {
            return Err(McpError::invalid_params("missing url parameter", None));
        }

        match self.client.fetch(&options).await {
            Ok(page) => Ok(CallToolResult::success(vec![Content::text(format_page(
                &page.title,
                &page.content,
            ))])),
            Err(e) => {
                warn!("read-webpage failed for {}: {}", options.url, e);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error processing webpage: {e}"
                ))]))
            }
        }
    }

    /// Search the web and render the results.
    #[tool(
        name = "web-search",
        description = "Search web and return results in LLM-friendly format"
    )]
    pub async fn web_search(
        &self,
        Parameters(options): Parameters<SearchOptions>,
    ) -> Result<CallToolResult, McpError> {
        if options.query.trim().is_empty() {
            return Err(McpError::invalid_params("missing query parameter", None));
        }

        // Callers exceeding the 1-10 window are clamped, not rejected.
        let limit = options.max_results.clamp(1, 10) as usize;

        match self.client.search(&options).await {
            Ok(results) if results.is_empty() => {
                debug!("no search results for {:?}", options.query);
                Ok(CallToolResult::success(vec![Content::text(
                    "No search results found for the query.",
                )]))
            }
            Ok(results) => Ok(CallToolResult::success(vec![Content::text(
                format_search_results(&results, limit),
            )])),
            Err(e) => {
                warn!("web-search failed for {:?}: {}", options.query, e);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error searching web: {e}"
                ))]))
            }
        }
    }
}

impl JinaReaderService {
    fn prompt_catalog() -> Vec<Prompt> {
        vec![
            Prompt::new(
                "fetch",
                Some("Get webpage content and convert to markdown format"),
                Some(vec![PromptArgument {
                    name: "url".to_string(),
                    title: None,
                    description: Some("URL of the webpage to fetch".to_string()),
                    required: Some(true),
                }]),
            ),
            Prompt::new(
                "search",
                Some("Search web and return LLM-friendly results"),
                Some(vec![
                    PromptArgument {
                        name: "query".to_string(),
                        title: None,
                        description: Some("Search query".to_string()),
                        required: Some(true),
                    },
                    PromptArgument {
                        name: "site".to_string(),
                        title: None,
                        description: Some("Limit search to specific domain".to_string()),
                        required: Some(false),
                    },
                ]),
            ),
        ]
    }

    async fn get_prompt_impl(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("getting prompt: {}", name);
        let arguments = arguments.ok_or_else(|| McpError::invalid_params("missing arguments", None))?;

        match name {
            "fetch" => {
                let url = required_argument(&arguments, "url")?;

                match self.client.fetch(&FetchOptions::for_url(url)).await {
                    Ok(page) => Ok(GetPromptResult {
                        description: Some(format!("Contents of {url}")),
                        messages: vec![PromptMessage::new_text(
                            PromptMessageRole::User,
                            format_page(&page.title, &page.content),
                        )],
                    }),
                    // The prompt still answers on failure; the error becomes
                    // the message body.
                    Err(e) => Ok(GetPromptResult {
                        description: Some(format!("Failed to fetch {url}")),
                        messages: vec![PromptMessage::new_text(
                            PromptMessageRole::User,
                            format!("Error: {e}"),
                        )],
                    }),
                }
            }
            "search" => {
                let query = required_argument(&arguments, "query")?.to_string();
                let options = SearchOptions {
                    query: query.clone(),
                    site: arguments
                        .get("site")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    ..SearchOptions::default()
                };

                // Reuse the web-search tool path so prompt and tool render
                // identically.
                let result = self.web_search(Parameters(options)).await?;
                let text = result
                    .content
                    .iter()
                    .find_map(|c| c.as_text())
                    .map(|t| t.text.clone())
                    .unwrap_or_else(|| "No results found.".to_string());

                Ok(GetPromptResult {
                    description: Some(format!("Search results for: {query}")),
                    messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
                })
            }
            other => Err(McpError::invalid_params(
                format!("unknown prompt: {other}"),
                None,
            )),
        }
    }

    async fn read_resource_impl(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        debug!("reading resource: {}", uri);
        let target = resolve_resource_target(uri)?;

        let page = self
            .client
            .fetch(&FetchOptions::for_url(&target))
            .await
            .map_err(|e| {
                warn!("resource read failed for {}: {}", target, e);
                McpError::invalid_params(format!("failed to read resource: {e}"), None)
            })?;

        // The page body is the resource text; title, description, and the
        // resolved URL travel as metadata so clients can render them
        // separately.
        let mut meta = Meta::default();
        meta.insert("url".to_string(), Value::String(target));
        meta.insert("title".to_string(), Value::String(page.title));
        if let Some(description) = page.description {
            meta.insert("description".to_string(), Value::String(description));
        }

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("text/markdown".to_string()),
                text: page.content,
                meta: Some(meta),
            }],
        })
    }
}

/// Map a `webpage://` URI to the URL that should be fetched.
///
/// `webpage://content/<percent-encoded-url>` decodes the remainder; any
/// other `webpage://` URI resolves to the documentation page. Other schemes
/// are rejected.
fn resolve_resource_target(uri: &str) -> Result<String, McpError> {
    let rest = uri
        .strip_prefix(URI_SCHEME)
        .ok_or_else(|| McpError::invalid_params(format!("unsupported scheme: {uri}"), None))?;

    match rest.strip_prefix(CONTENT_PREFIX) {
        Some(encoded) => urlencoding::decode(encoded)
            .map(|decoded| decoded.into_owned())
            .map_err(|e| McpError::invalid_params(format!("invalid resource uri: {e}"), None)),
        None => Ok(DEFAULT_RESOURCE_URL.to_string()),
    }
}

impl ServerHandler for JinaReaderService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "jina-reader".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Jina Reader MCP Server".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Jina reader MCP server. Use read-webpage to convert a URL to \
                 LLM-friendly text and web-search to search the web. Searching \
                 requires JINA_API_KEY to be set."
                    .to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        use rmcp::handler::server::tool::ToolCallContext;
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult::with_all_items(Self::prompt_catalog()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt_impl(&request.name, request.arguments).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let mut docs = RawResource::new("webpage://docs", "jina-docs");
        docs.description = Some("Jina reader documentation".to_string());
        docs.mime_type = Some("text/markdown".to_string());

        Ok(ListResourcesResult::with_all_items(vec![docs.no_annotation()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_resource_impl(&request.uri).await
    }
}

fn required_argument<'a>(arguments: &'a JsonObject, key: &str) -> Result<&'a str, McpError> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| McpError::invalid_params(format!("missing {key} parameter"), None))
}
