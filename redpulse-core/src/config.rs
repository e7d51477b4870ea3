//! Configuration loading for redpulse
//!
//! All configuration comes from environment variables, optionally seeded
//! from `.env` files. Config structs are built once at process start and
//! passed into functions; nothing here holds global client state.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Default CORS origin for the frontend dev server.
pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";

/// Load environment variables from .env files in multiple locations
///
/// Priority order (highest to lowest):
/// 1. Current directory .env
/// 2. ~/.redpulse/.env
/// 3. Environment variables already set
pub fn load_dotenv() -> Result<()> {
    let mut loaded_from = Vec::new();

    // Current directory first (highest priority)
    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(format!("current directory ({})", path.display()));
        debug!("Loaded .env from current directory: {}", path.display());
    }

    // Then ~/.redpulse/.env
    if let Some(dir) = config_dir() {
        let env_file = dir.join(".env");
        if env_file.exists() {
            // dotenvy doesn't overwrite existing vars, so this is safe
            match dotenvy::from_path(&env_file) {
                Ok(_) => {
                    loaded_from.push(format!("~/.redpulse/.env ({})", env_file.display()));
                    debug!("Loaded .env from ~/.redpulse: {}", env_file.display());
                }
                Err(e) => {
                    debug!("Failed to load ~/.redpulse/.env: {}", e);
                }
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.redpulse)");
    } else {
        info!("Loaded configuration from: {}", loaded_from.join(", "));
    }

    Ok(())
}

/// Get the redpulse config directory path (~/.redpulse)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".redpulse"))
}

/// Allowed CORS origin for the HTTP API.
///
/// Reads `CORS_ALLOW_ORIGIN`, falling back to the frontend dev server.
pub fn allowed_origin() -> String {
    std::env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string())
}

/// Reddit API credentials for the collector.
///
/// Built once at process start from `REDDIT_*` environment variables.
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub username: String,
    pub password: String,
}

impl RedditConfig {
    /// Read credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` naming the first missing or
    /// empty variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: require_var("REDDIT_CLIENT_ID")?,
            client_secret: require_var("REDDIT_CLIENT_SECRET")?,
            user_agent: require_var("REDDIT_USER_AGENT")?,
            username: require_var("REDDIT_USER")?,
            password: require_var("REDDIT_PASSWORD")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar { name }),
    }
}
