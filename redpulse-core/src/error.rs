//! Structured error types for redpulse-core.
//!
//! Uses `thiserror` so library consumers get composable errors;
//! the CLI binary wraps these in `anyhow` for reporting.

use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing or empty
    #[error("missing required environment variable '{name}'")]
    MissingVar { name: &'static str },
}
