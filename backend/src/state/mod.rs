// State management module
// Holds the royalty catalog, the withdrawals log, and the aggregations over them

pub mod app_state;
pub mod earnings;
pub mod errors;
pub mod models;
pub mod seed;

pub use app_state::{AppState, DEFAULT_MINIMUM_WITHDRAWAL};
pub use errors::{SeedError, WithdrawalError};
pub use models::{
    format_timestamp, Author, AuthorId, Book, BookId, Sale, SaleId, Withdrawal, WithdrawalId,
    WithdrawalStatus,
};
