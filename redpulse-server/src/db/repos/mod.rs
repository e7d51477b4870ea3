//! Repository implementations for database access
//!
//! Both record types are append-only: messages gain one row per self-test
//! call, classified posts come from collector runs. Nothing updates or
//! deletes.

pub mod messages;
pub mod posts;

pub use messages::{MessageRecord, MessageRepo};
pub use posts::{ClassifiedPost, PostRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
