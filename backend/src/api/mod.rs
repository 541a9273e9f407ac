//! API module
//!
//! Contains HTTP request handlers for the royalty endpoints

pub mod authors;
pub mod info;
pub mod utils;
pub mod withdrawals;
