//! Cache Entry Module
//!
//! Defines the structure for individual cached results.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// A single memoized result with its bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored result
    pub value: V,
    /// When the result was computed and stored
    pub cached_at: DateTime<Utc>,
    /// Number of cache hits served by this entry
    pub hits: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
            hits: 0,
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.cached_at)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string());

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.hits, 0);
        assert!(entry.cached_at <= Utc::now());
    }

    #[test]
    fn test_entry_record_hit() {
        let mut entry = CacheEntry::new(42u64);
        entry.record_hit();
        entry.record_hit();
        assert_eq!(entry.hits, 2);
    }

    #[test]
    fn test_entry_age_is_non_negative() {
        let entry = CacheEntry {
            value: 1u8,
            cached_at: Utc::now() - Duration::seconds(5),
            hits: 0,
        };

        assert!(entry.age() >= Duration::seconds(5));
    }
}
