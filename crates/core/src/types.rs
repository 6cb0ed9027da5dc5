//! Core types for the catalog
//!
//! This module defines the fundamental types used throughout the system:
//! - [`BookId`]: Catalog-assigned book identifier
//! - [`BookRecord`]: One book entry with identity and availability flag
//! - [`BookSummary`]: The `(id, title)` row shape returned by listings

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a book in the catalog
///
/// Ids are allocated by the catalog from a monotonically increasing counter
/// and are never reused, even after the book is removed.
///
/// # Examples
///
/// ```
/// use biblio_core::types::BookId;
///
/// let id = BookId::new(7);
/// assert_eq!(id.as_u64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Create a BookId from a raw integer
    pub const fn new(id: u64) -> Self {
        BookId(id)
    }

    /// Get the raw integer representation
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u64>().map(BookId)
    }
}

/// One book entry in the catalog
///
/// Identity (`id`, `title`, `author`) is immutable after creation; only the
/// availability flag changes, and only through the catalog's borrow/return
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    id: BookId,
    title: String,
    author: String,
    borrowed: bool,
}

impl BookRecord {
    /// Create a new record, available for borrowing
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            borrowed: false,
        }
    }

    /// The catalog-assigned id
    pub fn id(&self) -> BookId {
        self.id
    }

    /// The book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author name
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the book is currently borrowed
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Flag the record as borrowed.
    ///
    /// No precondition check: the caller must have verified availability.
    pub fn mark_borrowed(&mut self) {
        self.borrowed = true;
    }

    /// Flag the record as returned (available again).
    pub fn mark_returned(&mut self) {
        self.borrowed = false;
    }

    /// The `(id, title)` listing row for this record
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// The row shape returned by availability listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    /// The catalog-assigned id
    pub id: BookId,
    /// The book title
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_display_and_parse() {
        let id = BookId::new(19);
        assert_eq!(id.to_string(), "19");
        assert_eq!("19".parse::<BookId>().unwrap(), id);
        assert!("not-a-number".parse::<BookId>().is_err());
    }

    #[test]
    fn test_book_id_ordering() {
        assert!(BookId::new(1) < BookId::new(2));
        assert_eq!(BookId::new(5), BookId::new(5));
    }

    #[test]
    fn test_record_starts_available() {
        let record = BookRecord::new(BookId::new(1), "Dune", "Frank Herbert");
        assert_eq!(record.id(), BookId::new(1));
        assert_eq!(record.title(), "Dune");
        assert_eq!(record.author(), "Frank Herbert");
        assert!(!record.is_borrowed());
    }

    #[test]
    fn test_record_mark_transitions() {
        let mut record = BookRecord::new(BookId::new(1), "Dune", "Frank Herbert");
        record.mark_borrowed();
        assert!(record.is_borrowed());
        record.mark_returned();
        assert!(!record.is_borrowed());
    }

    #[test]
    fn test_summary_row_shape() {
        let record = BookRecord::new(BookId::new(3), "1984", "George Orwell");
        let summary = record.summary();
        assert_eq!(summary.id, BookId::new(3));
        assert_eq!(summary.title, "1984");
    }

    #[test]
    fn test_summary_serializes_as_id_title() {
        let summary = BookSummary {
            id: BookId::new(2),
            title: "1984".to_string(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"id":2,"title":"1984"}"#);
    }
}
