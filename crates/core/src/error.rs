//! Error types for catalog operations
//!
//! Every catalog operation either succeeds or returns one of these typed,
//! recoverable outcomes. The catalog never panics and never terminates the
//! process; callers decide how to present a failure to the user.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use crate::types::BookId;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Borrow target does not exist, or exists but is already borrowed.
    /// Recoverable: the caller may re-list and retry with a different id.
    #[error("book {id} is not available")]
    BookUnavailable {
        /// The id the borrow was attempted against
        id: BookId,
    },

    /// Return target does not exist, or exists but is not currently
    /// borrowed. Recoverable, same as above.
    #[error("book {id} is not returnable")]
    NotReturnable {
        /// The id the return was attempted against
        id: BookId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_book_unavailable() {
        let err = Error::BookUnavailable {
            id: BookId::new(42),
        };
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("not available"));
    }

    #[test]
    fn test_error_display_not_returnable() {
        let err = Error::NotReturnable { id: BookId::new(7) };
        let msg = err.to_string();
        assert!(msg.contains("7"));
        assert!(msg.contains("not returnable"));
    }

    #[test]
    fn test_error_carries_offending_id() {
        let err = Error::BookUnavailable { id: BookId::new(3) };
        match err {
            Error::BookUnavailable { id } => assert_eq!(id, BookId::new(3)),
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(Error::NotReturnable { id: BookId::new(1) })
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
