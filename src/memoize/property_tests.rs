//! Property-Based Tests for the memoizing wrapper

use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::memoize::{memoize, IdentityKey};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // When every distinct argument fits in the cache, the wrapped function
    // runs at most once per distinct argument, whatever the call order.
    #[test]
    fn prop_at_most_one_execution_per_key(calls in prop::collection::vec(0u16..32, 1..200)) {
        let executions: RefCell<HashMap<u16, u32>> = RefCell::new(HashMap::new());
        let mut f = memoize(32).unwrap().wrap(|n: u16| {
            *executions.borrow_mut().entry(n).or_insert(0) += 1;
            u32::from(n) * 7
        });

        for n in &calls {
            prop_assert_eq!(f.call(*n).unwrap(), u32::from(*n) * 7);
        }
        drop(f);

        for (n, count) in executions.borrow().iter() {
            prop_assert_eq!(*count, 1, "argument {} computed more than once", n);
        }
    }

    // Results are identical to calling the function directly, even while
    // entries are being evicted.
    #[test]
    fn prop_results_match_direct_calls(
        capacity in 1usize..6,
        calls in prop::collection::vec(0u8..12, 1..150)
    ) {
        let direct = |n: u8| u64::from(n).pow(3) + 1;
        let mut f = memoize(capacity).unwrap().key_maker(IdentityKey).wrap(direct);

        for n in calls {
            prop_assert_eq!(f.call(n).unwrap(), direct(n));
            prop_assert!(f.len() <= capacity);
            prop_assert_eq!(f.cached_keys().first().copied(), Some(n));
        }
    }

    // Inserting capacity + 1 distinct keys with no repeats evicts only the first.
    #[test]
    fn prop_first_key_evicted_after_overflow(capacity in 1usize..16) {
        let mut f = memoize(capacity).unwrap().key_maker(IdentityKey).wrap(|n: usize| n);

        for n in 0..=capacity {
            f.call(n).unwrap();
        }

        prop_assert!(!f.contains_key(&0));
        for n in 1..=capacity {
            prop_assert!(f.contains_key(&n));
        }
        prop_assert_eq!(f.stats().evictions, 1);
    }
}
