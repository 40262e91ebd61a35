//! Command implementations for the ric CLI

pub mod serve;

pub use serve::run_serve;
