//! redpulse CLI - Reddit sentiment collector and query API
//!
//! Two subcommands:
//! - `collect`: one-shot fetch-classify-persist run (cron-friendly)
//! - `serve`: HTTP API exposing stored messages and classified posts

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "redpulse",
    author,
    version,
    about = "Collect Reddit posts, score their sentiment, and serve the results"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one collection pass: fetch, classify, and persist posts
    Collect(commands::collect::CollectArgs),
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    redpulse_core::config::load_dotenv()?;

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Collect(args) => commands::collect::run_collect(args).await,
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
