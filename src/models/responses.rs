//! Response DTOs for the demo server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheEntry, CacheStats};

/// Response body for GET /fib/:n
#[derive(Debug, Clone, Serialize)]
pub struct FibResponse {
    /// The requested index
    pub n: u64,
    /// fib(n)
    pub value: u64,
    /// Whether the value was served from the cache
    pub cached: bool,
}

impl FibResponse {
    pub fn new(n: u64, value: u64, cached: bool) -> Self {
        Self { n, value, cached }
    }
}

/// One cached key as reported by GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeyInfo {
    /// Derived cache key
    pub key: String,
    /// Hits served by this entry
    pub hits: u64,
    /// Milliseconds since the entry was stored
    pub age_ms: i64,
}

impl KeyInfo {
    pub fn new<V>(key: impl Into<String>, entry: &CacheEntry<V>) -> Self {
        Self {
            key: key.into(),
            hits: entry.hits,
            age_ms: entry.age().num_milliseconds(),
        }
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Name of the memoized function
    pub function: String,
    /// Configured bound, null when unbounded
    pub capacity: Option<usize>,
    /// Cached keys, most recently used first
    pub keys: Vec<KeyInfo>,
    /// Key evicted by the next miss, present only when the cache is full
    pub next_eviction: Option<String>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Misses whose computation failed
    pub failures: u64,
    /// Calls rejected during key derivation
    pub key_errors: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured bound, null when unbounded
    pub capacity: Option<usize>,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            failures: stats.failures,
            key_errors: stats.key_errors,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
