// Domain records held by the store
// Authors, books and sales are seed data; withdrawals are appended at runtime

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Unique identifier for an author
pub type AuthorId = u32;

/// Unique identifier for a book
pub type BookId = u32;

/// Unique identifier for a sale
pub type SaleId = u32;

/// Unique identifier for a withdrawal, assigned sequentially from 1
pub type WithdrawalId = u32;

/// Royalty recipient owning zero or more books
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Unique identifier for the author
    pub id: AuthorId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Payout bank account number
    pub bank_account: String,
    /// Bank branch IFSC code
    pub ifsc: String,
}

/// Titled work with a fixed per-unit royalty, owned by one author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Owning author
    pub author_id: AuthorId,
    /// Royalty earned per copy sold, in whole rupees
    pub royalty_per_sale: i64,
}

/// Quantity of a book sold on a given date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    /// Unique identifier for the sale
    pub id: SaleId,
    /// Book that was sold
    pub book_id: BookId,
    /// Number of copies
    pub quantity: u32,
    /// Day of the sale, serialized as `YYYY-MM-DD`
    pub sale_date: NaiveDate,
}

impl Sale {
    /// Royalty this sale generates at the given per-copy rate
    pub fn royalty(&self, royalty_per_sale: i64) -> i64 {
        i64::from(self.quantity) * royalty_per_sale
    }
}

/// Lifecycle state of a withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    /// Requested, awaiting payout
    Pending,
}

/// Payout request against an author's balance
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Withdrawal {
    /// Sequential identifier
    pub id: WithdrawalId,
    /// Author the payout belongs to
    pub author_id: AuthorId,
    /// Amount withdrawn, in whole rupees
    pub amount: i64,
    /// Always `Pending` at creation
    pub status: WithdrawalStatus,
    /// Creation time, millisecond precision
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Format a timestamp as ISO-8601 UTC with milliseconds, e.g. `2025-01-05T10:30:00.000Z`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for [`format_timestamp`]
pub fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
