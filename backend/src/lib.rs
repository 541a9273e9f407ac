//! BookLeaf Backend Library
//!
//! Royalty balances and withdrawals for authors, served over HTTP/JSON.
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
/// Application state management
///
/// Holds the seed catalog, the withdrawals log, and the royalty aggregations.
pub mod state;
