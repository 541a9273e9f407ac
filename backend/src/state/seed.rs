// Fixed catalog loaded at startup

use super::models::{Author, Book, Sale};
use chrono::NaiveDate;

fn author(id: u32, name: &str, email: &str, bank_account: &str, ifsc: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        email: email.to_string(),
        bank_account: bank_account.to_string(),
        ifsc: ifsc.to_string(),
    }
}

fn book(id: u32, title: &str, author_id: u32, royalty_per_sale: i64) -> Book {
    Book {
        id,
        title: title.to_string(),
        author_id,
        royalty_per_sale,
    }
}

fn sale(id: u32, book_id: u32, quantity: u32, (y, m, d): (i32, u32, u32)) -> Sale {
    Sale {
        id,
        book_id,
        quantity,
        sale_date: NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date"),
    }
}

/// Seed authors, in listing order
pub fn authors() -> Vec<Author> {
    vec![
        author(1, "Priya Sharma", "priya@email.com", "1234567890", "HDFC0001234"),
        author(2, "Rahul Verma", "rahul@email.com", "0987654321", "ICIC0005678"),
        author(3, "Anita Desai", "anita@email.com", "5678901234", "SBIN0009012"),
    ]
}

/// Seed books
pub fn books() -> Vec<Book> {
    vec![
        book(1, "The Silent River", 1, 45),
        book(2, "Midnight in Mumbai", 1, 60),
        book(3, "Code & Coffee", 2, 75),
        book(4, "Startup Diaries", 2, 50),
        book(5, "Poetry of Pain", 2, 30),
        book(6, "Garden of Words", 3, 40),
    ]
}

/// Seed sales
pub fn sales() -> Vec<Sale> {
    vec![
        sale(1, 1, 25, (2025, 1, 5)),
        sale(2, 1, 40, (2025, 1, 12)),
        sale(3, 2, 15, (2025, 1, 8)),
        sale(4, 3, 60, (2025, 1, 3)),
        sale(5, 3, 45, (2025, 1, 15)),
        sale(6, 4, 30, (2025, 1, 10)),
        sale(7, 5, 20, (2025, 1, 18)),
        sale(8, 6, 10, (2025, 1, 20)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(authors().len(), 3);
        assert_eq!(books().len(), 6);
        assert_eq!(sales().len(), 8);
    }

    #[test]
    fn test_seed_dates_parse() {
        assert_eq!(sales()[0].sale_date.to_string(), "2025-01-05");
        assert_eq!(sales()[7].sale_date.to_string(), "2025-01-20");
    }

    #[test]
    #[should_panic(expected = "valid seed date")]
    fn test_invalid_seed_date_panics() {
        sale(99, 1, 1, (2025, 2, 30));
    }
}
