//! uxlex MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes uxlex's design-knowledge search
//! as tools for MCP clients.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uxlex::core::config::Config;
use uxlex::core::services::Services;
use uxlex::core::xdg::XdgDirs;
use uxlex::mcp::McpServer;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("uxlex=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries the protocol
        .with_ansi(false);

    if std::env::var("UXLEX_LOG_FORMAT").is_ok_and(|f| f == "json") {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    if !config.data.dir.is_dir() {
        tracing::warn!(
            "Data directory {:?} does not exist; every search will report a missing source",
            config.data.dir
        );
    }

    let services = Arc::new(Services::new(config));
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
