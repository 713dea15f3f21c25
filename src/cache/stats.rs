//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Calls answered from the cache
    pub hits: u64,
    /// Calls whose key was absent
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Misses where the wrapped function failed (nothing was cached)
    pub failures: u64,
    /// Calls rejected because no key could be derived from the arguments
    pub key_errors: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Configured bound, None when unbounded
    pub capacity: Option<usize>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn record_key_error(&mut self) {
        self.key_errors += 1;
    }

    // == Update Entry Count ==
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new(Some(8));
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.failures, 0);
        assert_eq!(stats.key_errors, 0);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.capacity, Some(8));
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new(None);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new(None);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new(None);
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_failures_and_key_errors_do_not_affect_hit_rate() {
        let mut stats = CacheStats::new(None);
        stats.record_miss();
        stats.record_failure();
        stats.record_key_error();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.key_errors, 1);
    }

    #[test]
    fn test_serialize_unbounded_capacity() {
        let json = serde_json::to_value(CacheStats::new(None)).unwrap();
        assert!(json["capacity"].is_null());
        assert_eq!(json["hits"], 0);
    }
}
