//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::resolver::DEFAULT_SUGGESTION_LIMIT;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cached search result in seconds
    pub cache_ttl: u64,
    /// Maximum number of autocomplete suggestions
    pub autocomplete_limit: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Optional JSON file used to seed the catalog at startup
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Search cache TTL in seconds (default: 300)
    /// - `AUTOCOMPLETE_LIMIT` - Max suggestions per request (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Expired entry sweep frequency in seconds (default: 1)
    /// - `CATALOG_PATH` - Seed file for the catalog (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            autocomplete_limit: env_or("AUTOCOMPLETE_LIMIT", defaults.autocomplete_limit),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            autocomplete_limit: DEFAULT_SUGGESTION_LIMIT,
            server_port: 3000,
            cleanup_interval: 1,
            catalog_path: None,
        }
    }
}

/// Parses an environment variable, falling back when unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
