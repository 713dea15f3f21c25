//! The memoized function wrapper.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::cache::{Capacity, CacheStats, CacheStore};
use crate::error::{MemoizeError, Result};
use crate::memoize::KeyMaker;

// == Memoized ==
/// A function wrapped with its own LRU result cache.
///
/// Built by [`Memoize::wrap`](crate::Memoize::wrap) or
/// [`Memoize::wrap_fallible`](crate::Memoize::wrap_fallible). Arguments
/// are passed as one value `A` (a tuple for several positional arguments).
///
/// There is no internal locking: calls take `&mut self`. To share one
/// wrapper between threads, put it behind a mutex and hold the lock for the
/// whole call.
pub struct Memoized<A, V, F, KM>
where
    KM: KeyMaker<A>,
{
    func: F,
    key_maker: KM,
    store: CacheStore<KM::Key, V>,
    name: String,
    log_hits: bool,
    _args: PhantomData<fn(A)>,
}

impl<A, V, F, KM> Memoized<A, V, F, KM>
where
    KM: KeyMaker<A>,
    V: Clone,
{
    pub(crate) fn new(
        func: F,
        key_maker: KM,
        capacity: Capacity,
        name: String,
        log_hits: bool,
    ) -> Self {
        Self {
            func,
            key_maker,
            store: CacheStore::new(capacity),
            name,
            log_hits,
            _args: PhantomData,
        }
    }

    // == Call ==
    /// Calls an infallible wrapped function through the cache.
    ///
    /// The only error is `MemoizeError::KeyDerivation`, in which case the
    /// function is not invoked and the cache is left as it was.
    pub fn call(&mut self, args: A) -> Result<V>
    where
        F: FnMut(A) -> V,
    {
        let key = self.derive_key(&args)?;
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        let value = (self.func)(args);
        self.store.insert(key, value.clone());
        Ok(value)
    }

    // == Try Call ==
    /// Calls a fallible wrapped function through the cache.
    ///
    /// Errors from the function are returned unchanged and nothing is cached,
    /// so the next identical call invokes the function again. Key derivation
    /// failures are converted into `E`.
    pub fn try_call<E>(&mut self, args: A) -> std::result::Result<V, E>
    where
        F: FnMut(A) -> std::result::Result<V, E>,
        E: From<MemoizeError>,
    {
        let key = self.derive_key(&args)?;
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        match (self.func)(args) {
            Ok(value) => {
                self.store.insert(key, value.clone());
                Ok(value)
            }
            Err(err) => {
                self.store.record_failure();
                debug!("{}: call for key {:?} failed, nothing cached", self.name, key);
                Err(err)
            }
        }
    }

    // == Is Cached ==
    /// Whether a call with `args` would be a hit. Does not refresh recency.
    pub fn is_cached(&self, args: &A) -> Result<bool> {
        let key = self.key_maker.make_key(args)?;
        Ok(self.store.contains(&key))
    }

    // == Contains Key ==
    pub fn contains_key(&self, key: &KM::Key) -> bool {
        self.store.contains(key)
    }

    // == Cached Keys ==
    /// Cached keys from most to least recently used.
    pub fn cached_keys(&self) -> Vec<KM::Key> {
        self.store.keys().cloned().collect()
    }

    /// Read-only view of the backing store.
    pub fn cache(&self) -> &CacheStore<KM::Key, V> {
        &self.store
    }

    /// The wrapped function.
    pub fn inner(&self) -> &F {
        &self.func
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Capacity {
        self.store.capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn derive_key(&mut self, args: &A) -> Result<KM::Key> {
        self.key_maker.make_key(args).map_err(|err| {
            self.store.record_key_error();
            warn!("{}: {}", self.name, err);
            err
        })
    }

    fn lookup(&mut self, key: &KM::Key) -> Option<V> {
        let value = self.store.get(key).cloned()?;
        if self.log_hits {
            debug!("Hit cache of {}(). Key: {:?}", self.name, key);
        }
        Some(value)
    }
}

impl<A, V, F, KM> fmt::Debug for Memoized<A, V, F, KM>
where
    KM: KeyMaker<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}
