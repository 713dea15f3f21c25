//! Capacity bound of a cache.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{MemoizeError, Result};

/// Maximum number of distinct entries a cache retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many entries; the least recently used is evicted beyond it
    Bounded(NonZeroUsize),
    /// Never evicts
    Unbounded,
}

impl Capacity {
    /// Builds a bounded capacity, rejecting zero.
    pub fn bounded(max_entries: usize) -> Result<Self> {
        NonZeroUsize::new(max_entries)
            .map(Capacity::Bounded)
            .ok_or_else(|| {
                MemoizeError::Configuration(format!(
                    "capacity must be at least 1, got {}",
                    max_entries
                ))
            })
    }

    /// The bound, or None when unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(n) => Some(n.get()),
            Capacity::Unbounded => None,
        }
    }

    /// True once `len` entries would break the bound.
    pub fn is_exceeded_by(&self, len: usize) -> bool {
        self.limit().is_some_and(|limit| len > limit)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(n) => write!(f, "{}", n),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}
