//! Cache Store Module
//!
//! Bounded cache engine combining HashMap storage with LRU tracking.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Capacity, CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// Bounded key/value storage with LRU eviction.
///
/// Every key in `entries` is tracked by `lru` and vice versa.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: Capacity,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    // == Constructor ==
    /// Creates an empty store with the given capacity.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(capacity.limit()),
            capacity,
        }
    }

    // == Get ==
    /// Looks up a key, refreshing its recency on a hit.
    ///
    /// Records a hit or a miss in the statistics.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.record_hit();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Looks up a key without touching recency or statistics.
    pub fn peek(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Insert ==
    /// Stores a value as the most recently used entry.
    ///
    /// An existing value under the same key is replaced. If the insertion
    /// pushes the store over capacity, exactly one least recently used entry
    /// is evicted and its key returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value));

        let mut evicted = None;
        if self.capacity.is_exceeded_by(self.entries.len()) {
            if let Some(oldest) = self.lru.evict_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!("Evicted least recently used key {:?}", oldest);
                evicted = Some(oldest);
            }
        }

        self.stats.set_total_entries(self.entries.len());
        evicted
    }

    // == Failure Bookkeeping ==
    /// Records a miss whose computation failed.
    pub fn record_failure(&mut self) {
        self.stats.record_failure();
    }

    /// Records a call whose key could not be derived.
    pub fn record_key_error(&mut self) {
        self.stats.record_key_error();
    }

    // == Keys ==
    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.lru.iter()
    }

    // == Eviction Candidate ==
    /// The key the next over-capacity insertion would evict, if the store is full.
    pub fn eviction_candidate(&self) -> Option<&K> {
        match self.capacity.limit() {
            Some(limit) if self.entries.len() >= limit => self.lru.peek_oldest(),
            _ => None,
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
