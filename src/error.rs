//! Error types for memoization and the demo server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Memoize Error Enum ==
/// Errors raised by the memoizing wrapper itself.
///
/// Failures of the wrapped function are never converted into this type; they
/// are handed back to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoizeError {
    /// Invalid decorator configuration, e.g. a capacity of zero
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The call arguments could not be turned into a cache key
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
}

/// Convenience Result type for memoization.
pub type Result<T> = std::result::Result<T, MemoizeError>;

// == Service Error Enum ==
/// Error type for the HTTP demo service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The memoizing layer rejected the call
    #[error(transparent)]
    Memoize(#[from] MemoizeError),

    /// Fibonacci number does not fit in a u64
    #[error("fib({0}) overflows a 64-bit integer")]
    Overflow(u64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Memoize(MemoizeError::KeyDerivation(_)) => StatusCode::BAD_REQUEST,
            ServiceError::Memoize(MemoizeError::Configuration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Overflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
