//! redpulse-server: read-only HTTP API over the redpulse store
//!
//! Serves the two frontend endpoints (message self-test and classified
//! posts) plus a health probe. All writes happen in the collector; the
//! only write here is the self-test row on `GET /`.

pub mod db;
pub mod http;

pub use http::{run_server, AppState, ServerConfig};
