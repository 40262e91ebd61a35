//! Database layer - connection pool, store seam, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - One SQL statement per store call, no transactions
//! - Rely on DB constraints (foreign keys, uniqueness) - no check-then-insert
//! - Handlers see only the `Store` trait, so tests can swap in `MemoryStore`

pub mod pool;
pub mod store;
pub mod repos;
pub mod postgres;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options, ping};
pub use store::{Store, StoreError};
pub use postgres::PgStore;
pub use memory::MemoryStore;
