//! Database configuration from the environment
//!
//! Resolution order for the connection string:
//! 1. `DATABASE_URL`
//! 2. `DB_URL`
//!
//! A `.env` file in the current directory is loaded first; it never
//! overrides variables that are already set.

use tracing::{debug, info};

use crate::error::{Result, ShoppingListError};

/// Default maximum connections for the pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const URL_KEYS: [&str; 2] = ["DATABASE_URL", "DB_URL"];
const MAX_CONNECTIONS_KEY: &str = "SHOPLIST_MAX_CONNECTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Load `.env` (if any) and resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from {}", path.display()),
            Err(e) => debug!("No .env loaded: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = URL_KEYS
            .iter()
            .find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
            .ok_or_else(|| ShoppingListError::config("DATABASE_URL (or DB_URL) is not set"))?;

        let max_connections = match lookup(MAX_CONNECTIONS_KEY) {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        debug!(max_connections, "resolved database config");

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ShoppingListError::config(format!(
            "{MAX_CONNECTIONS_KEY} must be a positive integer, got '{raw}'"
        ))),
    }
}
