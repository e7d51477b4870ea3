//! HTTP API server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use redpulse_core::config::allowed_origin;
use redpulse_server::db::create_pool;
use redpulse_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Frontend origin allowed by CORS (overrides CORS_ALLOW_ORIGIN)
    #[arg(long)]
    pub allow_origin: Option<String>,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.redpulse/.env")?;

    tracing::info!("Starting redpulse server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        allow_origin: args.allow_origin.unwrap_or_else(allowed_origin),
    };

    // Runs migrations, then blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
