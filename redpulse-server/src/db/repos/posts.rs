//! Classified post repository
//!
//! Read-only view over the collector's output.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Classified post record from database
#[derive(Debug, Clone, FromRow)]
pub struct ClassifiedPost {
    pub id: i64,
    pub title: String,
    pub sentiment: String,
    pub created_at: DateTime<Utc>,
}

/// Classified post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every committed classified post in insertion order.
    pub async fn list_all(&self) -> Result<Vec<ClassifiedPost>, DbError> {
        let posts = sqlx::query_as(
            r#"
            SELECT id, title, sentiment, created_at
            FROM reddit_posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}
