//! Database layer - connection pool and repositories
//!
//! - Connection pool (max 5 connections), checked out per request
//! - Explicit idempotent migrations run before first use
//! - Append-only tables; repositories expose no update or delete

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

/// Schema migrations shared with the collector (workspace-root migrations/).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
