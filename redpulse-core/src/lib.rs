//! redpulse-core: configuration and sentiment classification
//!
//! Shared building blocks for the collector and the HTTP API:
//! - Environment/.env configuration loading
//! - The sentiment classifier seam and its default lexicon model
//! - Structured error types

pub mod config;
pub mod error;
pub mod sentiment;

pub use error::ConfigError;
pub use sentiment::{LexiconModel, SentimentLabel, SentimentModel};
