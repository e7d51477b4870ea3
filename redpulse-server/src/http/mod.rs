//! HTTP layer: server setup, routes, and API error mapping

pub mod error;
pub mod routes;
pub mod server;

pub use server::{run_server, AppState, ServerConfig, ServerError};
