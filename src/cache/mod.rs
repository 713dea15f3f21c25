//! Cache Module
//!
//! Bounded in-memory storage with LRU eviction, used by every memoized function.

mod capacity;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use capacity::Capacity;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
