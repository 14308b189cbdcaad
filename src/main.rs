//! bing-wallpaper-mcp: Bing wallpaper MCP server over stdio

use anyhow::{Context, Result};
use bing_wallpaper_mcp::{
    config::{LogFormat, ServerConfig},
    mcp::BingWallpaperServer,
};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes logging on stderr; stdout carries the protocol stream
///
/// Respects the RUST_LOG environment variable. Default level: info
fn init_logging(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bing_wallpaper_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(config: ServerConfig) -> Result<()> {
    let server =
        BingWallpaperServer::from_config(&config).context("failed to build wallpaper client")?;
    info!(api_base = %config.api_base, "Wallpaper source: Bing image archive");

    info!("Initializing stdio transport...");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    info!("Bing Wallpaper MCP Server running on stdio");
    info!("Client info: {:?}", service.peer_info());

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    info!("bing-wallpaper-mcp server shutting down");
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();
    init_logging(config.log_format);

    if let Err(e) = run(config).await {
        error!("Fatal error in main(): {:#}", e);
        std::process::exit(1);
    }
}
