//! API Module
//!
//! HTTP handlers and routing for the memoization demo server.
//!
//! # Endpoints
//! - `GET /fib/:n` - Memoized Fibonacci number
//! - `GET /keys` - Cached keys, most recently used first
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
