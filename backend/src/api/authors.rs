//! Author API handlers
//!
//! Read-only views over the catalog: listings, detail, sales history and
//! withdrawal history. Every figure is recomputed per request.

use crate::error::AppError;
use crate::state::{format_timestamp, AppState, AuthorId, BookId, WithdrawalId, WithdrawalStatus};
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Author row in `GET /authors`
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    /// Author id
    pub id: AuthorId,
    /// Author name
    pub name: String,
    /// Royalties earned to date
    pub total_earnings: i64,
    /// Earnings minus withdrawals
    pub current_balance: i64,
}

/// Per-book figures in author detail
#[derive(Debug, Serialize)]
pub struct BookSummary {
    /// Book id
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Royalty per copy
    pub royalty_per_sale: i64,
    /// Copies sold
    pub total_sold: u64,
    /// Royalty earned by this book
    pub total_royalty: i64,
}

/// Author detail response
#[derive(Debug, Serialize)]
pub struct AuthorDetail {
    /// Author id
    pub id: AuthorId,
    /// Author name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Earnings minus withdrawals
    pub current_balance: i64,
    /// Royalties earned to date
    pub total_earnings: i64,
    /// Number of books owned
    pub total_books: usize,
    /// Per-book breakdown, in catalog order
    pub books: Vec<BookSummary>,
}

/// Sale row in `GET /authors/:id/sales`
#[derive(Debug, Serialize)]
pub struct SaleEntry {
    /// Title of the book sold
    pub book_title: String,
    /// Copies sold
    pub quantity: u32,
    /// Royalty generated by this sale
    pub royalty_earned: i64,
    /// Day of the sale
    pub sale_date: NaiveDate,
}

/// Withdrawal row in `GET /authors/:id/withdrawals`
#[derive(Debug, Serialize)]
pub struct WithdrawalEntry {
    /// Withdrawal id
    pub id: WithdrawalId,
    /// Amount withdrawn
    pub amount: i64,
    /// Payout status
    pub status: WithdrawalStatus,
    /// ISO-8601 creation time
    pub created_at: String,
}

/// GET /authors - List every author with earnings and balance
pub async fn list_authors(
    State(state): State<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<AuthorSummary>>, AppError> {
    let state = state.read().await;
    let authors = state
        .authors()
        .iter()
        .map(|author| AuthorSummary {
            id: author.id,
            name: author.name.clone(),
            total_earnings: state.total_earnings(author.id),
            current_balance: state.current_balance(author.id),
        })
        .collect();

    Ok(Json(authors))
}

/// GET /authors/:id - Author detail with per-book breakdown
pub async fn get_author(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<AuthorDetail>, AppError> {
    let state = state.read().await;
    let author = state.find_author(&id).ok_or(AppError::AuthorNotFound)?;

    let books: Vec<BookSummary> = state
        .books_for_author(author.id)
        .into_iter()
        .map(|book| {
            let total_sold = state.total_sold(book);
            BookSummary {
                id: book.id,
                title: book.title.clone(),
                royalty_per_sale: book.royalty_per_sale,
                total_sold,
                total_royalty: state.book_royalty(book),
            }
        })
        .collect();

    Ok(Json(AuthorDetail {
        id: author.id,
        name: author.name.clone(),
        email: author.email.clone(),
        current_balance: state.current_balance(author.id),
        total_earnings: state.total_earnings(author.id),
        total_books: books.len(),
        books,
    }))
}

/// GET /authors/:id/sales - Sales of the author's books, newest first
pub async fn get_author_sales(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SaleEntry>>, AppError> {
    let state = state.read().await;
    let author = state.find_author(&id).ok_or(AppError::AuthorNotFound)?;

    let sales = state
        .sales_for_author(author.id)
        .into_iter()
        .map(|(book, sale)| SaleEntry {
            book_title: book.title.clone(),
            quantity: sale.quantity,
            royalty_earned: sale.royalty(book.royalty_per_sale),
            sale_date: sale.sale_date,
        })
        .collect();

    Ok(Json(sales))
}

/// GET /authors/:id/withdrawals - Author's withdrawals, newest first
pub async fn get_author_withdrawals(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<WithdrawalEntry>>, AppError> {
    let state = state.read().await;
    let author = state.find_author(&id).ok_or(AppError::AuthorNotFound)?;

    let withdrawals = state
        .withdrawals_for_author(author.id)
        .into_iter()
        .map(|w| WithdrawalEntry {
            id: w.id,
            amount: w.amount,
            status: w.status,
            created_at: format_timestamp(&w.created_at),
        })
        .collect();

    Ok(Json(withdrawals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::new()))
    }

    #[tokio::test]
    async fn test_list_authors() {
        let state = create_test_state();
        let Json(authors) = list_authors(State(state)).await.unwrap();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0].name, "Priya Sharma");
        assert_eq!(authors[1].total_earnings, 9975);
        assert_eq!(authors[2].current_balance, 400);
    }

    #[tokio::test]
    async fn test_get_author_detail() {
        let state = create_test_state();
        let Json(detail) = get_author(State(state), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(detail.email, "rahul@email.com");
        assert_eq!(detail.total_books, 3);
        assert_eq!(detail.total_earnings, 9975);
        assert_eq!(detail.books[0].title, "Code & Coffee");
        assert_eq!(detail.books[0].total_sold, 105);
        assert_eq!(detail.books[0].total_royalty, 7875);
        let sum: i64 = detail.books.iter().map(|b| b.total_royalty).sum();
        assert_eq!(sum, detail.total_earnings);
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        for id in ["999", "abc", ""] {
            let result = get_author(State(create_test_state()), Path(id.to_string())).await;
            match result {
                Err(AppError::AuthorNotFound) => {}
                other => panic!("Expected AuthorNotFound for {:?}, got: {:?}", id, other),
            }
        }
    }

    #[tokio::test]
    async fn test_get_author_sales_sorted() {
        let state = create_test_state();
        let Json(sales) = get_author_sales(State(state), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(sales.len(), 4);
        assert_eq!(sales[0].book_title, "Poetry of Pain");
        assert_eq!(sales[0].royalty_earned, 600);
        assert!(sales.windows(2).all(|w| w[0].sale_date >= w[1].sale_date));
        assert_eq!(sales[3].sale_date.to_string(), "2025-01-03");
    }

    #[tokio::test]
    async fn test_get_author_withdrawals() {
        let state = create_test_state();
        {
            let mut s = state.write().await;
            let early = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
            let late = Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap();
            s.record_withdrawal(1, 500, early).unwrap();
            s.record_withdrawal(1, 700, late).unwrap();
            s.record_withdrawal(2, 900, late).unwrap();
        }

        let Json(entries) = get_author_withdrawals(State(state), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
        assert_eq!(entries[0].created_at, "2025-03-02T08:00:00.000Z");
        assert_eq!(entries[1].amount, 500);
        assert_eq!(entries[1].status, WithdrawalStatus::Pending);
    }

    #[tokio::test]
    async fn test_author_scoped_routes_not_found() {
        let missing = || Path("999".to_string());
        assert!(matches!(
            get_author_sales(State(create_test_state()), missing()).await,
            Err(AppError::AuthorNotFound)
        ));
        assert!(matches!(
            get_author_withdrawals(State(create_test_state()), missing()).await,
            Err(AppError::AuthorNotFound)
        ));
    }
}
