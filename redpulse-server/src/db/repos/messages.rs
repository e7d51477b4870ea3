//! Message repository
//!
//! Backs the self-test endpoint: insert one fixed row, read everything.

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Message record from database
#[derive(Debug, Clone, FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub text: String,
}

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one message and return it with its assigned id.
    pub async fn create(&self, text: &str) -> Result<MessageRecord, DbError> {
        let message: MessageRecord = sqlx::query_as(
            r#"
            INSERT INTO messages (text)
            VALUES ($1)
            RETURNING id, text
            "#,
        )
        .bind(text)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// List every stored message in insertion order.
    pub async fn list_all(&self) -> Result<Vec<MessageRecord>, DbError> {
        let messages = sqlx::query_as(
            r#"
            SELECT id, text
            FROM messages
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }
}
