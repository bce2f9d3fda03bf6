//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Which player store backs the engine
    pub store: StoreBackend,
    /// CORS allowed origins (comma-separated, or "*" for any); `None` disables CORS
    pub cors_allowed_origins: Option<String>,
}

/// Player store selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local map; state is lost on restart.
    Memory,
    /// Neo4j graph database.
    Neo4j(Neo4jConfig),
}

/// Neo4j connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    /// Neo4j connection URI
    pub uri: String,
    /// Neo4j username
    pub user: String,
    /// Neo4j password
    pub password: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = match lookup("PLAYER_STORE")
            .unwrap_or_else(|| "memory".to_string())
            .parse::<StoreKind>()?
        {
            StoreKind::Memory => StoreBackend::Memory,
            StoreKind::Neo4j => StoreBackend::Neo4j(Neo4jConfig {
                uri: lookup("NEO4J_URI").unwrap_or_else(|| "bolt://localhost:7687".to_string()),
                user: lookup("NEO4J_USER").unwrap_or_else(|| "neo4j".to_string()),
                password: lookup("NEO4J_PASSWORD")
                    .context("NEO4J_PASSWORD environment variable is required")?,
            }),
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            store,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum StoreKind {
    Memory,
    Neo4j,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "neo4j" => Ok(Self::Neo4j),
            other => Err(anyhow!(
                "PLAYER_STORE must be 'memory' or 'neo4j', got '{other}'"
            )),
        }
    }
}
