//! Configuration Module
//!
//! Handles loading the cache and gateway configuration from environment variables.

use std::env;

use crate::codec::ValueMode;

/// Cache and gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Master switch; when false no backend is contacted at all
    pub activated: bool,
    /// Backend connection string (`redis://...` or `memory://`)
    pub url: String,
    /// How stored strings are turned back into values
    pub value_mode: ValueMode,
    /// Expiry sweep interval in seconds for the memory backend
    pub cleanup_interval: u64,
    /// HTTP gateway port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ACTIVATED` - Enable caching (default: false)
    /// - `CACHE_URL` - Backend URL (default: empty)
    /// - `CACHE_VALUE_MODE` - `typed` or `raw` (default: typed)
    /// - `CLEANUP_INTERVAL` - Memory backend sweep in seconds (default: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            activated: lookup("CACHE_ACTIVATED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.activated),
            url: lookup("CACHE_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.url),
            value_mode: lookup("CACHE_VALUE_MODE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.value_mode),
            cleanup_interval: lookup("CLEANUP_INTERVAL")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activated: false,
            url: String::new(),
            value_mode: ValueMode::Typed,
            cleanup_interval: 1,
            server_port: 3000,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
