//! # must-read MCP Server
//!
//! Model Context Protocol server that hands a project's AGENTS.md to coding
//! agents before they start work.
//!
//! ## Usage
//!
//! ```text
//! must-read <workspace>
//! ```
//!
//! The server speaks MCP over stdin/stdout, so all diagnostics go to stderr.
//! Set `RUST_LOG` to change verbosity, or point `MUST_READ_CONFIG` at a YAML
//! file to override the server settings.

use must_read::MustReadServer;
use must_read_core::{ServerConfig, WorkspaceGuide};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A bad config file is logged, not fatal; only the transport can abort startup
    let (config, config_error) = ServerConfig::load_or_default();

    // Initialize logging; stdout is reserved for the transport
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Some(e) = config_error {
        tracing::error!("Invalid configuration, using defaults: {}", e);
    }

    let guide = WorkspaceGuide::from_arg(std::env::args_os().nth(1));
    match guide.workspace() {
        Some(dir) => tracing::info!("Workspace: {}", dir.display()),
        None => tracing::warn!("No workspace directory provided"),
    }

    let server = MustReadServer::with_settings(guide, config.server);

    tracing::info!("Starting MCP server over stdio");

    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Server failed to start: {}", e);
        e
    })?;

    // Wait for the peer to close the transport
    service.waiting().await?;

    tracing::info!("must-read server shutting down");

    Ok(())
}
