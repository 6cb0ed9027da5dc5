//! # Biblio
//!
//! Embedded library-catalog engine with a console front desk.
//!
//! Biblio tracks a catalog of books and enforces the borrow/return state
//! machine under a single lock: a book can never be borrowed twice, removed
//! ids are never reassigned, and the borrowed-id index always mirrors the
//! per-record flags.
//!
//! ## Quick Start
//!
//! ```
//! use biblio::prelude::*;
//!
//! # fn main() -> biblio::Result<()> {
//! // A fresh catalog, stocked from the default shelf
//! let catalog = Catalog::seeded();
//!
//! // Borrow and return by id
//! let title = catalog.borrow(BookId::new(2), "alice")?;
//! assert_eq!(title, "1984");
//! catalog.return_book(BookId::new(2), "alice")?;
//!
//! // Librarians grow and shrink the catalog
//! let new_book = catalog.add("Dune Messiah", "Frank Herbert");
//! catalog.remove(new_book.id());
//! # Ok(())
//! # }
//! ```
//!
//! ## Components
//!
//! - [`Catalog`] - the collection and its concurrency guard
//! - [`BookRecord`] / [`BookSummary`] - record and listing-row types
//! - [`Role`] - reader/librarian operation gating for session layers
//! - [`Error`] - the two recoverable outcomes (`BookUnavailable`,
//!   `NotReturnable`)
//!
//! The `biblio` binary (crate `biblio-cli`) is the reference session
//! controller: role menus, a rustyline REPL, and shell/pipe modes.

#![warn(missing_docs)]

// Re-export the public surface of the member crates
pub use biblio_catalog::{seed, Catalog, DEFAULT_SHELF};
pub use biblio_core::{
    BookId, BookRecord, BookSummary, CatalogOp, Error, ParseRoleError, Result, Role,
};

/// Convenience imports for typical use
pub mod prelude {
    pub use crate::{BookId, BookRecord, BookSummary, Catalog, CatalogOp, Error, Result, Role};
}
