//! redpulse-collector: the collect-classify-persist pipeline
//!
//! One invocation does one bounded run: verify the Reddit session, fetch
//! up to `limit` hot posts from a subreddit, classify each title, and
//! commit one row per post in a single transaction. Any failure along the
//! way drops the transaction, so no partial batch ever lands.

pub mod reddit;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use redpulse_core::sentiment::{SentimentLabel, SentimentModel};
use reddit::{RedditClient, RedditError};

/// Schema migrations shared with the server (workspace-root migrations/).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");

/// Pipeline failure: anything that aborts a collection run.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("reddit api error: {0}")]
    Reddit(#[from] RedditError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A classified post staged for insertion.
#[derive(Debug, Clone)]
pub struct StagedPost {
    pub title: String,
    pub sentiment: SentimentLabel,
    pub created_at: DateTime<Utc>,
}

/// Run one collection pass: verify session, fetch, classify, persist.
///
/// The identity check runs before any fetch; a session without a username
/// aborts the run with zero rows written. Returns the number of rows
/// committed.
pub async fn run_collect(
    pool: &PgPool,
    client: &RedditClient,
    model: &dyn SentimentModel,
    subreddit: &str,
    limit: u32,
) -> Result<usize, CollectError> {
    let user = client.me().await?;
    info!(user = %user, "reddit session verified");

    let posts = client.hot(subreddit, limit).await?;
    info!(count = posts.len(), subreddit, "fetched hot posts");

    let staged: Vec<StagedPost> = posts
        .iter()
        .map(|post| StagedPost {
            title: post.title.clone(),
            sentiment: model.classify(&post.title),
            created_at: post.created_at(),
        })
        .collect();

    store_posts(pool, &staged).await
}

/// Commit staged posts in one all-or-nothing transaction.
///
/// If any insert fails the transaction is dropped and rolled back;
/// re-running with the same source items inserts duplicates (no dedup).
pub async fn store_posts(pool: &PgPool, posts: &[StagedPost]) -> Result<usize, CollectError> {
    let mut tx = pool.begin().await?;

    for post in posts {
        sqlx::query(
            r#"
            INSERT INTO reddit_posts (title, sentiment, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&post.title)
        .bind(post.sentiment.as_str())
        .bind(post.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(count = posts.len(), "committed classified posts");

    Ok(posts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redpulse_core::sentiment::LexiconModel;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p redpulse-collector -- --ignored

    fn staged(titles: &[&str]) -> Vec<StagedPost> {
        let model = LexiconModel;
        titles
            .iter()
            .map(|title| StagedPost {
                title: title.to_string(),
                sentiment: model.classify(title),
                created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            })
            .collect()
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn successful_run_inserts_exactly_n_rows(pool: PgPool) -> sqlx::Result<()> {
        let posts = staged(&["Great launch day", "Terrible outage", "Weekly thread"]);
        let committed = store_posts(&pool, &posts).await.expect("store failed");
        assert_eq!(committed, 3);

        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT title, sentiment FROM reddit_posts ORDER BY id")
                .fetch_all(&pool)
                .await?;
        assert_eq!(rows.len(), 3);
        for (_, sentiment) in &rows {
            assert!(
                SentimentLabel::ALL
                    .iter()
                    .any(|label| label.as_str() == sentiment),
                "label '{sentiment}' outside fixed set"
            );
        }
        assert_eq!(rows[1].1, "negative");
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn aborted_batch_leaves_no_rows(pool: PgPool) -> sqlx::Result<()> {
        // Stage a row inside a transaction, then drop it without commit,
        // the same boundary a mid-run failure hits.
        let mut tx = pool.begin().await?;
        sqlx::query("INSERT INTO reddit_posts (title, sentiment, created_at) VALUES ($1, $2, $3)")
            .bind("staged but never committed")
            .bind("positive")
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        drop(tx);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reddit_posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 0);
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn rerun_with_same_items_duplicates_rows(pool: PgPool) -> sqlx::Result<()> {
        let posts = staged(&["Same post title"]);
        store_posts(&pool, &posts).await.expect("first run failed");
        store_posts(&pool, &posts).await.expect("second run failed");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reddit_posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 2);
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn created_at_roundtrips_source_timestamp(pool: PgPool) -> sqlx::Result<()> {
        let posts = staged(&["Timestamped post"]);
        store_posts(&pool, &posts).await.expect("store failed");

        let stored: (DateTime<Utc>,) = sqlx::query_as("SELECT created_at FROM reddit_posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(stored.0.timestamp(), 1_700_000_000);
        Ok(())
    }
}
