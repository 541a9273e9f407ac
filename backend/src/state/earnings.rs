// Derived royalty figures
// Nothing here is stored; every value is recomputed from the catalog and withdrawals log

use super::app_state::AppState;
use super::models::{AuthorId, Book};

impl AppState {
    /// Copies sold of one book across all its sales
    pub fn total_sold(&self, book: &Book) -> u64 {
        self.sales_for_book(book.id)
            .map(|s| u64::from(s.quantity))
            .sum()
    }

    /// Royalty a single book has earned
    pub fn book_royalty(&self, book: &Book) -> i64 {
        self.sales_for_book(book.id)
            .map(|s| s.royalty(book.royalty_per_sale))
            .sum()
    }

    /// Royalties earned across all of an author's books (0 with no books)
    pub fn total_earnings(&self, author_id: AuthorId) -> i64 {
        self.books_for_author(author_id)
            .into_iter()
            .map(|book| self.book_royalty(book))
            .sum()
    }

    /// Sum of the author's withdrawal amounts (0 with none)
    pub fn total_withdrawn(&self, author_id: AuthorId) -> i64 {
        self.withdrawals()
            .iter()
            .filter(|w| w.author_id == author_id)
            .map(|w| w.amount)
            .sum()
    }

    /// Earnings minus withdrawals
    pub fn current_balance(&self, author_id: AuthorId) -> i64 {
        self.total_earnings(author_id) - self.total_withdrawn(author_id)
    }
}
