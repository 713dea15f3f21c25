//! Cache key derivation
//!
//! A [`KeyMaker`] turns the arguments of a call into the key its result is
//! stored under. Three makers are provided:
//!
//! - [`SerializedKey`] (default): canonical JSON rendering of the arguments
//! - [`IdentityKey`]: the arguments themselves, for `Hash + Eq + Clone` types
//! - [`KeyFn`]: a user supplied closure
//!
//! # Canonical form
//!
//! [`SerializedKey`] renders arguments as compact JSON with the fields of
//! every object sorted by name. Named struct fields and string-keyed maps
//! therefore play the role of keyword arguments: their order never changes
//! the key. A field skipped with
//! `#[serde(skip_serializing_if = "Option::is_none")]` renders as `null`, so
//! omitting an optional argument and passing `None` share one key.
//!
//! With derived `Serialize` impls, distinct values of one argument type never
//! share a key: `Some(x)` renders as `[x]`, keeping `None` apart from
//! `Some(None)`. NaN and infinite floats have no canonical form and fail with
//! `MemoizeError::KeyDerivation`.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{MemoizeError, Result};
use crate::memoize::canonical::to_canonical_value;

// == Key Maker Trait ==
/// Derives a cache key from call arguments.
pub trait KeyMaker<A: ?Sized> {
    /// Key stored in the cache; equality decides hits.
    type Key: Hash + Eq + Clone + Debug;

    /// Produces the key for `args`, or `MemoizeError::KeyDerivation`.
    fn make_key(&self, args: &A) -> Result<Self::Key>;
}

// == Serialized Key ==
/// Default key maker: canonical serialization of the arguments.
///
/// Fails at call time for arguments without a canonical form: maps keyed by
/// tuples or vectors, NaN or infinite floats, and types whose `Serialize`
/// impl errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializedKey;

impl<A: Serialize + ?Sized> KeyMaker<A> for SerializedKey {
    type Key = String;

    fn make_key(&self, args: &A) -> Result<String> {
        canonical_key(args)
    }
}

/// Renders `args` in canonical form (object fields sorted by name).
pub fn canonical_key<A: Serialize + ?Sized>(args: &A) -> Result<String> {
    let value =
        to_canonical_value(args).map_err(|e| MemoizeError::KeyDerivation(e.to_string()))?;
    Ok(value.to_string())
}

// == Identity Key ==
/// Uses a clone of the arguments as the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKey;

impl<A: Hash + Eq + Clone + Debug> KeyMaker<A> for IdentityKey {
    type Key = A;

    fn make_key(&self, args: &A) -> Result<A> {
        Ok(args.clone())
    }
}

// == Closure Key ==
/// Wraps a user closure `Fn(&A) -> K` as a key maker.
#[derive(Clone, Copy)]
pub struct KeyFn<F>(pub F);

impl<F> Debug for KeyFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("KeyFn")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}

impl<A, K, F> KeyMaker<A> for KeyFn<F>
where
    A: ?Sized,
    F: Fn(&A) -> K,
    K: Hash + Eq + Clone + Debug,
{
    type Key = K;

    fn make_key(&self, args: &A) -> Result<K> {
        Ok((self.0)(args))
    }
}
