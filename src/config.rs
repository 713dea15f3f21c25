//! Configuration Module
//!
//! Handles loading the demo server configuration from environment variables.

use std::env;

use crate::error::Result;
use crate::memoize::{memoize, Memoize};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of results the memoized function retains
    pub capacity: usize,
    /// Emit a debug event on every cache hit
    pub log_hits: bool,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CAPACITY` - Maximum cached results (default: 128)
    /// - `MEMO_LOG_HITS` - `true`/`1` to log cache hits (default: false)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// A capacity of 0 is passed through unchanged; it is rejected when the
    /// decorator is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("MEMO_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            log_hits: env::var("MEMO_LOG_HITS")
                .ok()
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_hits),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Builds the decorator described by this configuration.
    pub fn memoize(&self) -> Result<Memoize> {
        Ok(memoize(self.capacity)?.log_hits(self.log_hits))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 128,
            log_hits: false,
            server_port: 3000,
        }
    }
}
