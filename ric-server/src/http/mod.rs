//! HTTP server layer
//!
//! Axum server with:
//! - CORS (allow-list or any origin)
//! - Request tracing and per-request deadline
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, CorsOrigins, ServerConfig, ServerError};
pub use error::ApiError;
