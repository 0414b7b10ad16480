//! Block Info MCP Server
//!
//! A Model Context Protocol server for read-only Ethereum chain queries.

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use block_info_mcp::{BlockInfoServer, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stdout carries protocol frames, so log to stderr)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(config = ?config, "Starting Block Info MCP Server");

    let server = BlockInfoServer::new(config)?;

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;
    tracing::info!("MCP server is running and ready for requests");

    // Wait for the peer to close the transport
    running.waiting().await?;

    tracing::info!("Transport closed, shutting down");
    Ok(())
}
