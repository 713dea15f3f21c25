//! memo_lru - Memoizing function wrapper backed by a bounded LRU cache
//!
//! Wrap a function once, then call it through the wrapper: results are
//! cached under a key derived from the arguments, and the least recently
//! used result is dropped once the configured capacity is exceeded.
//!
//! The crate also ships a small HTTP server (`memo_lru` binary) serving a
//! memoized Fibonacci function and the statistics of its cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod memoize;
pub mod models;

pub use api::AppState;
pub use cache::{Capacity, CacheStats};
pub use config::Config;
pub use error::{MemoizeError, Result, ServiceError};
pub use memoize::{memoize, IdentityKey, KeyFn, KeyMaker, Memoize, Memoized, SerializedKey};
