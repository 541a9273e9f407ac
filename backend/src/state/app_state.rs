// Application state management
// Holds the seed catalog (authors, books, sales) and the withdrawals log

use super::errors::{SeedError, WithdrawalError};
use super::models::{
    Author, AuthorId, Book, BookId, Sale, Withdrawal, WithdrawalId, WithdrawalStatus,
};
use super::seed;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Smallest amount an author may withdraw, in whole rupees
pub const DEFAULT_MINIMUM_WITHDRAWAL: i64 = 500;

/// Main application state
///
/// The catalog tables are fixed after construction. The only mutation is
/// [`AppState::record_withdrawal`], which appends to the withdrawals log and
/// advances the id counter.
#[derive(Debug, Clone)]
pub struct AppState {
    authors: Vec<Author>,
    books: Vec<Book>,
    sales: Vec<Sale>,
    withdrawals: Vec<Withdrawal>,
    next_withdrawal_id: WithdrawalId,
    minimum_withdrawal: i64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_catalog(seed::authors(), seed::books(), seed::sales())
    }
}

impl AppState {
    /// Create a state loaded with the seed catalog and no withdrawals
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state over an arbitrary catalog with no withdrawals
    pub fn from_catalog(authors: Vec<Author>, books: Vec<Book>, sales: Vec<Sale>) -> Self {
        Self {
            authors,
            books,
            sales,
            withdrawals: Vec::new(),
            next_withdrawal_id: 1,
            minimum_withdrawal: DEFAULT_MINIMUM_WITHDRAWAL,
        }
    }

    /// Override the minimum withdrawal amount
    ///
    /// The minimum never drops below 1 rupee.
    pub fn with_minimum_withdrawal(mut self, minimum: i64) -> Self {
        self.minimum_withdrawal = minimum.max(1);
        self
    }

    /// Check that ids are unique and every book and sale points at an existing record
    pub fn validate_catalog(&self) -> Result<(), SeedError> {
        let mut author_ids = HashSet::new();
        for author in &self.authors {
            if !author_ids.insert(author.id) {
                return Err(SeedError::DuplicateId {
                    table: "author",
                    id: author.id,
                });
            }
        }

        let mut book_ids = HashSet::new();
        for book in &self.books {
            if !book_ids.insert(book.id) {
                return Err(SeedError::DuplicateId {
                    table: "book",
                    id: book.id,
                });
            }
            if !author_ids.contains(&book.author_id) {
                return Err(SeedError::UnknownAuthor {
                    book_id: book.id,
                    author_id: book.author_id,
                });
            }
        }

        let mut sale_ids = HashSet::new();
        for sale in &self.sales {
            if !sale_ids.insert(sale.id) {
                return Err(SeedError::DuplicateId {
                    table: "sale",
                    id: sale.id,
                });
            }
            if !book_ids.contains(&sale.book_id) {
                return Err(SeedError::UnknownBook {
                    sale_id: sale.id,
                    book_id: sale.book_id,
                });
            }
        }

        Ok(())
    }

    /// All authors, in seed order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All books, in seed order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All sales, in seed order
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// All withdrawals, in creation order
    pub fn withdrawals(&self) -> &[Withdrawal] {
        &self.withdrawals
    }

    /// Minimum amount accepted by [`AppState::record_withdrawal`]
    pub fn minimum_withdrawal(&self) -> i64 {
        self.minimum_withdrawal
    }

    /// Get an author by numeric id
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// Resolve an author from a raw id string (e.g. a path segment)
    ///
    /// Text that is not a non-negative integer resolves to `None`.
    pub fn find_author(&self, raw_id: &str) -> Option<&Author> {
        raw_id
            .trim()
            .parse::<AuthorId>()
            .ok()
            .and_then(|id| self.author(id))
    }

    /// Books owned by an author, in seed order
    pub fn books_for_author(&self, author_id: AuthorId) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.author_id == author_id)
            .collect()
    }

    /// Sales of one book, in seed order
    pub fn sales_for_book(&self, book_id: BookId) -> impl Iterator<Item = &Sale> {
        self.sales.iter().filter(move |s| s.book_id == book_id)
    }

    /// Sales of an author's books paired with the book, newest first
    ///
    /// Sales on the same day keep their seed order.
    pub fn sales_for_author(&self, author_id: AuthorId) -> Vec<(&Book, &Sale)> {
        let books = self.books_for_author(author_id);
        let mut sales: Vec<(&Book, &Sale)> = self
            .sales
            .iter()
            .filter_map(|sale| {
                books
                    .iter()
                    .find(|b| b.id == sale.book_id)
                    .map(|book| (*book, sale))
            })
            .collect();
        sales.sort_by(|(_, a), (_, b)| b.sale_date.cmp(&a.sale_date));
        sales
    }

    /// Withdrawals made by an author, newest first
    ///
    /// Withdrawals with equal timestamps keep their creation order.
    pub fn withdrawals_for_author(&self, author_id: AuthorId) -> Vec<&Withdrawal> {
        let mut withdrawals: Vec<&Withdrawal> = self
            .withdrawals
            .iter()
            .filter(|w| w.author_id == author_id)
            .collect();
        withdrawals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        withdrawals
    }

    /// Validate and append a pending withdrawal
    ///
    /// Checks run in order: author exists, amount meets the minimum, amount
    /// does not exceed the current balance. Withdrawing the entire balance is
    /// allowed. The id counter only advances on success.
    pub fn record_withdrawal(
        &mut self,
        author_id: AuthorId,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Withdrawal, WithdrawalError> {
        if self.author(author_id).is_none() {
            return Err(WithdrawalError::AuthorNotFound);
        }
        if amount <= 0 || amount < self.minimum_withdrawal {
            return Err(WithdrawalError::BelowMinimum(self.minimum_withdrawal));
        }
        let balance = self.current_balance(author_id);
        if amount > balance {
            return Err(WithdrawalError::InsufficientBalance(balance));
        }

        let withdrawal = Withdrawal {
            id: self.next_withdrawal_id,
            author_id,
            amount,
            status: WithdrawalStatus::Pending,
            created_at,
        };
        self.next_withdrawal_id += 1;
        self.withdrawals.push(withdrawal.clone());
        Ok(withdrawal)
    }
}
