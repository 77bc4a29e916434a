//! Recurrente MCP server entrypoint.
//!
//! Speaks MCP on stdin/stdout; logs go to stderr.
//!
//! Environment:
//! - `RECURRENTE_PUBLIC_KEY`, `RECURRENTE_SECRET_KEY` (required)
//! - `RECURRENTE_BASE_URL`, `RECURRENTE_HTTP__TIMEOUT_SECS`
//! - `RECURRENTE_LOG__LEVEL`, `RECURRENTE_LOG__JSON`, `RUST_LOG`

use std::process::ExitCode;
use std::sync::Arc;

use recurrente_mcp::adapters::{HttpApiClient, McpServer, RecurrenteConfig};
use recurrente_mcp::application::RecurrenteToolExecutor;
use recurrente_mcp::config::AppConfig;
use recurrente_mcp::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    // Tracing is not up yet, so startup failures go straight to stderr
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing(&config.log) {
        eprintln!("Fatal error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server stopped");
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.is_test_mode() {
        tracing::info!("Using Recurrente test keys");
    }

    let client = HttpApiClient::new(RecurrenteConfig::from(config))?;
    let executor = RecurrenteToolExecutor::new(Arc::new(client));
    let server = McpServer::new(Arc::new(executor));

    tracing::info!(base_url = %config.base_url, "Recurrente MCP server running on stdio");
    server.serve(tokio::io::stdin(), tokio::io::stdout()).await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
