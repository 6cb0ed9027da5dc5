//! Core types for the Biblio catalog
//!
//! This crate defines the foundational types used throughout the system:
//! - BookId: Catalog-assigned book identifier
//! - BookRecord: One book entry (identity + availability flag)
//! - BookSummary: The row shape returned by availability listings
//! - Role: Session roles and their allowed operation subsets
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod role;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use role::{CatalogOp, ParseRoleError, Role};
pub use types::{BookId, BookRecord, BookSummary};
