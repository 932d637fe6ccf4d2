//! Serve command: run the MCP server on stdio.

use clap::Args;
use quiz_lens_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve analysis tools over MCP until the client disconnects.
///
/// Stdout carries the protocol, so all logging goes to stderr or the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let server = ProjectServer::from_config(&config, max_input);
    info!("starting MCP server on stdio");

    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
