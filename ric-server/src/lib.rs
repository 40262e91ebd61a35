//! ric-server: courses, students, and enrollments over HTTP
//!
//! A thin REST layer over PostgreSQL. Each route validates its input and
//! performs a single statement through the [`db::Store`] seam.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, Store, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
