//! HTTP client for the Jina reader (`r.jina.ai`) and search (`s.jina.ai`) APIs.

mod client;
mod config;
mod error;
mod types;

pub use client::JinaClient;
pub use config::JinaConfig;
pub use error::{JinaError, Result};
pub use types::{FetchOptions, FetchedPage, OutputFormat, SearchOptions, SearchResultItem};
