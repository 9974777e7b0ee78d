//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog record, keyed by `title`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique, case-sensitive identifier
    #[schema(example = "Book 1")]
    pub title: String,
    pub author: String,
    /// Whether the book is currently checked out
    #[serde(default)]
    pub borrowed: bool,
    /// Publication year
    #[schema(example = 2001)]
    pub year: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, borrowed: bool, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            borrowed,
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_flat_object() {
        let book = Book::new("Book 1", "Title 1", false, 2001);
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"title": "Book 1", "author": "Title 1", "borrowed": false, "year": 2001})
        );
    }

    #[test]
    fn test_borrowed_defaults_to_false() {
        let book: Book =
            serde_json::from_value(json!({"title": "Dune", "author": "Frank Herbert", "year": 1965})).unwrap();
        assert!(!book.borrowed);
    }
}
