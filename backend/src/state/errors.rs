//! Store-level error types
//!
//! Errors raised while validating the seed catalog or recording withdrawals.

use super::models::{AuthorId, BookId, SaleId};
use thiserror::Error;

/// Reasons a withdrawal request is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalError {
    /// No author matches the requested id
    #[error("Author not found")]
    AuthorNotFound,

    /// Amount is absent, non-numeric or below the minimum (carries the minimum)
    #[error("Minimum withdrawal amount is ₹{0}")]
    BelowMinimum(i64),

    /// Amount exceeds the author's balance (carries the current balance)
    #[error("Insufficient balance. Current balance is ₹{0}")]
    InsufficientBalance(i64),
}

/// Referential integrity failures in the seed catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A book references an author that does not exist
    #[error("Book {book_id} references unknown author {author_id}")]
    UnknownAuthor {
        /// Offending book
        book_id: BookId,
        /// Missing author
        author_id: AuthorId,
    },

    /// A sale references a book that does not exist
    #[error("Sale {sale_id} references unknown book {book_id}")]
    UnknownBook {
        /// Offending sale
        sale_id: SaleId,
        /// Missing book
        book_id: BookId,
    },

    /// Two records in the same table share an id
    #[error("Duplicate {table} id {id}")]
    DuplicateId {
        /// Table name
        table: &'static str,
        /// Repeated id
        id: u32,
    },
}
