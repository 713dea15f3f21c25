//! Memoize Module
//!
//! Wraps a function so that repeated calls with the same arguments are
//! answered from a bounded LRU cache instead of being recomputed.
//!
//! ```
//! use memo_lru::memoize;
//!
//! let mut calls = 0;
//! let mut square = memoize(2)?.wrap(|n: u64| {
//!     calls += 1;
//!     n * n
//! });
//!
//! assert_eq!(square.call(4)?, 16);
//! assert_eq!(square.call(4)?, 16);
//! drop(square);
//! assert_eq!(calls, 1);
//! # Ok::<(), memo_lru::MemoizeError>(())
//! ```

mod canonical;
mod keys;
mod wrapper;

#[cfg(test)]
mod property_tests;

pub use keys::{canonical_key, IdentityKey, KeyFn, KeyMaker, SerializedKey};
pub use wrapper::Memoized;

use crate::cache::Capacity;
use crate::error::Result;

// == Decorator Entry Point ==
/// Creates a memoizing decorator retaining at most `capacity` results.
///
/// Fails with `MemoizeError::Configuration` when `capacity` is zero.
pub fn memoize(capacity: usize) -> Result<Memoize> {
    Memoize::new(capacity)
}

// == Memoize Builder ==
/// Configuration of a memoizing decorator, applied with [`Memoize::wrap`].
///
/// Each wrap creates a fresh, independent cache.
#[derive(Debug, Clone)]
pub struct Memoize<KM = SerializedKey> {
    capacity: Capacity,
    key_maker: KM,
    name: Option<String>,
    log_hits: bool,
}

impl Memoize<SerializedKey> {
    /// Bounded decorator keyed by [`SerializedKey`].
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_capacity(Capacity::bounded(capacity)?))
    }

    /// Decorator whose cache never evicts.
    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            capacity,
            key_maker: SerializedKey,
            name: None,
            log_hits: false,
        }
    }
}

impl<KM> Memoize<KM> {
    /// Derives keys with `key_fn` instead of the current key maker.
    pub fn key_fn<A, K, F>(self, key_fn: F) -> Memoize<KeyFn<F>>
    where
        A: ?Sized,
        F: Fn(&A) -> K,
    {
        self.key_maker(KeyFn(key_fn))
    }

    /// Replaces the key maker, e.g. with [`IdentityKey`].
    pub fn key_maker<M>(self, key_maker: M) -> Memoize<M> {
        Memoize {
            capacity: self.capacity,
            key_maker,
            name: self.name,
            log_hits: self.log_hits,
        }
    }

    /// Name used in log events; defaults to the wrapped function's type name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Emit a debug event for every cache hit.
    pub fn log_hits(mut self, enabled: bool) -> Self {
        self.log_hits = enabled;
        self
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    // == Wrap ==
    /// Applies the decorator to an infallible function.
    pub fn wrap<A, V, F>(self, func: F) -> Memoized<A, V, F, KM>
    where
        KM: KeyMaker<A>,
        F: FnMut(A) -> V,
        V: Clone,
    {
        self.build(func)
    }

    /// Applies the decorator to a function returning `Result`; only `Ok`
    /// values are cached.
    pub fn wrap_fallible<A, V, E, F>(self, func: F) -> Memoized<A, V, F, KM>
    where
        KM: KeyMaker<A>,
        F: FnMut(A) -> std::result::Result<V, E>,
        V: Clone,
    {
        self.build(func)
    }

    fn build<A, V, F>(self, func: F) -> Memoized<A, V, F, KM>
    where
        KM: KeyMaker<A>,
        V: Clone,
    {
        let name = self
            .name
            .unwrap_or_else(|| std::any::type_name::<F>().to_string());
        Memoized::new(func, self.key_maker, self.capacity, name, self.log_hits)
    }
}
