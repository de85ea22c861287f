//! MCP server for the Jina reader and search endpoints.
//!
//! Exposes two tools (`read-webpage`, `web-search`), two prompts (`fetch`,
//! `search`), and a `webpage://` resource over the MCP stdio transport.

pub mod format;
pub mod jina;
pub mod service;

// Re-export important types for external use
pub use jina::{FetchOptions, FetchedPage, JinaClient, JinaConfig, JinaError, OutputFormat, SearchOptions, SearchResultItem};
pub use service::JinaReaderService;
