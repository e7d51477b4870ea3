//! One-shot collector run
//!
//! Designed for cron: connect, migrate, run one bounded collection pass.
//! A pipeline failure (auth check, fetch, classify, or staging) rolls the
//! batch back, logs the error, and still exits normally; only
//! infrastructure failures before the pipeline starts exit nonzero.

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use redpulse_collector::reddit::RedditClient;
use redpulse_collector::MIGRATOR;
use redpulse_core::config::RedditConfig;
use redpulse_core::sentiment::LexiconModel;

/// Arguments for the collect command
#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Subreddit to collect from
    #[arg(long, default_value = "all")]
    pub subreddit: String,

    /// Maximum number of hot posts to fetch
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run one collection pass
pub async fn run_collect(args: CollectArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.redpulse/.env")?;

    let reddit_config = RedditConfig::from_env().context("Reddit credentials incomplete")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let model = LexiconModel;

    // Everything from login onward is the pipeline boundary: on any
    // failure the batch is rolled back and the process exits normally.
    let outcome = async {
        let client = RedditClient::login(&reddit_config).await?;
        redpulse_collector::run_collect(&pool, &client, &model, &args.subreddit, args.limit).await
    }
    .await;

    match outcome {
        Ok(count) => {
            tracing::info!(
                count,
                subreddit = %args.subreddit,
                "collection run complete"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "pipeline run failed; batch rolled back");
        }
    }

    Ok(())
}
