//! API Handlers
//!
//! HTTP request handlers for each demo server endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{MemoizeError, ServiceError};
use crate::memoize::{Memoized, SerializedKey};
use crate::models::{FibResponse, HealthResponse, KeyInfo, KeysResponse, StatsResponse};

/// Signature of the function served by the demo.
pub type FibFn = fn(u64) -> Result<u64, ServiceError>;

/// The memoized Fibonacci function held by the server.
pub type FibMemo = Memoized<u64, u64, FibFn, SerializedKey>;

/// Computes the n-th Fibonacci number, failing once it no longer fits a u64.
///
/// fib(93) is the largest value that fits.
///
/// Iterative on purpose: a recursive version cannot call back into its own
/// wrapper, since `Memoized::call` holds `&mut self` for the whole call. The
/// cache saves the full O(n) loop on repeated requests instead.
pub fn fibonacci(n: u64) -> Result<u64, ServiceError> {
    if n == 0 {
        return Ok(0);
    }

    // (fib(i - 1), fib(i)) starting at i = 1
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev.checked_add(curr).ok_or(ServiceError::Overflow(n))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Application state shared across all handlers.
///
/// The memoized function mutates its cache on every call, so it sits behind
/// a mutex held for the duration of each call.
#[derive(Clone)]
pub struct AppState {
    pub fib: Arc<Mutex<FibMemo>>,
}

impl AppState {
    /// Creates a new AppState around an already wrapped function.
    pub fn new(fib: FibMemo) -> Self {
        Self {
            fib: Arc::new(Mutex::new(fib)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is invalid.
    pub fn from_config(config: &Config) -> Result<Self, MemoizeError> {
        let fib = config
            .memoize()?
            .named("fibonacci")
            .wrap_fallible(fibonacci as FibFn);
        info!("Wrapped {} with capacity {}", fib.name(), fib.capacity());
        Ok(Self::new(fib))
    }
}

/// Handler for GET /fib/:n
///
/// Returns fib(n) and whether it came from the cache.
pub async fn fib_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<FibResponse>, ServiceError> {
    let n: u64 = raw.parse().map_err(|_| {
        ServiceError::InvalidRequest(format!("'{}' is not a non-negative integer", raw))
    })?;

    let mut fib = state.fib.lock().await;
    let cached = fib.is_cached(&n)?;
    let value = fib.try_call(n)?;

    if !cached {
        info!("Computed fib({}) and cached it", n);
    }
    Ok(Json(FibResponse::new(n, value, cached)))
}

/// Handler for GET /keys
///
/// Lists cached keys from most to least recently used.
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let fib = state.fib.lock().await;
    let cache = fib.cache();

    let keys = cache
        .keys()
        .filter_map(|key| cache.peek(key).map(|entry| KeyInfo::new(key.clone(), entry)))
        .collect();

    Json(KeysResponse {
        function: fib.name().to_string(),
        capacity: fib.capacity().limit(),
        keys,
        next_eviction: cache.eviction_candidate().cloned(),
    })
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let fib = state.fib.lock().await;
    Json(StatsResponse::from(fib.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(capacity: usize) -> AppState {
        let config = Config {
            capacity,
            ..Config::default()
        };
        AppState::from_config(&config).unwrap()
    }

    #[test]
    fn test_fibonacci_values() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(1).unwrap(), 1);
        assert_eq!(fibonacci(2).unwrap(), 1);
        assert_eq!(fibonacci(10).unwrap(), 55);
        assert_eq!(fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_fibonacci_overflow() {
        assert!(matches!(fibonacci(94), Err(ServiceError::Overflow(94))));
        assert!(matches!(
            fibonacci(u64::MAX),
            Err(ServiceError::Overflow(u64::MAX))
        ));
    }

    #[test]
    fn test_from_config_rejects_zero_capacity() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(MemoizeError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_fib_handler_miss_then_hit() {
        let state = test_state(8);

        let first = fib_handler(State(state.clone()), Path("20".to_string()))
            .await
            .unwrap();
        assert_eq!(first.value, 6765);
        assert!(!first.cached);

        let second = fib_handler(State(state.clone()), Path("20".to_string()))
            .await
            .unwrap();
        assert_eq!(second.value, 6765);
        assert!(second.cached);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_fib_handler_invalid_input() {
        let state = test_state(8);

        let result = fib_handler(State(state), Path("-3".to_string())).await;
        assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_fib_handler_overflow_not_cached() {
        let state = test_state(8);

        let result = fib_handler(State(state.clone()), Path("100".to_string())).await;
        assert!(matches!(result, Err(ServiceError::Overflow(100))));

        let keys = keys_handler(State(state.clone())).await;
        assert!(keys.keys.is_empty());

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.failures, 1);
    }

    #[tokio::test]
    async fn test_keys_handler_reports_recency_and_next_eviction() {
        let state = test_state(2);

        for n in ["1", "2", "1"] {
            fib_handler(State(state.clone()), Path(n.to_string()))
                .await
                .unwrap();
        }

        let keys = keys_handler(State(state)).await;
        let order: Vec<&str> = keys.keys.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(order, vec!["1", "2"]);
        assert_eq!(keys.next_eviction.as_deref(), Some("2"));
        assert_eq!(keys.capacity, Some(2));
        assert_eq!(keys.function, "fibonacci");
        assert_eq!(keys.keys[0].hits, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
