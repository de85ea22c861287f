use std::path::PathBuf;

use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jina_reader_mcp::{JinaConfig, JinaReaderService};

fn log_dir() -> PathBuf {
    std::env::var("JINA_MCP_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs"))
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("jina-reader-mcp")
        .filename_suffix("log")
        .max_log_files(5)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the worker guard alive for the lifetime of the process so
    // buffered log lines are flushed.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the MCP protocol, so the console layer writes to stderr.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = JinaConfig::from_env();
    if config.api_key.is_none() {
        info!("JINA_API_KEY not set, web search will be unavailable");
    }

    let service = JinaReaderService::new(config)?;

    info!("starting jina-reader MCP server on stdio");
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    info!("jina-reader MCP server stopped");
    Ok(())
}
