//! Session roles and the operation subsets they permit
//!
//! Roles are a tagged enum rather than a type hierarchy: each variant maps
//! to a fixed subset of catalog operations. The session layer consults
//! [`Role::permits`] before dispatching; the catalog itself is role-blind.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The catalog operations a session can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogOp {
    /// List available books
    List,
    /// Borrow a book by id
    Borrow,
    /// Return a borrowed book by id
    Return,
    /// Add a new book to the catalog
    Add,
    /// Remove a book from the catalog
    Remove,
}

/// A session role, gating which operations are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Can list, borrow, and return books
    Reader,
    /// Can list, add, and remove books
    Librarian,
}

impl Role {
    /// The operations this role is allowed to perform, in menu order
    pub fn operations(&self) -> &'static [CatalogOp] {
        match self {
            Role::Reader => &[CatalogOp::List, CatalogOp::Borrow, CatalogOp::Return],
            Role::Librarian => &[CatalogOp::Add, CatalogOp::Remove, CatalogOp::List],
        }
    }

    /// Whether this role may perform the given operation
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio_core::role::{CatalogOp, Role};
    ///
    /// assert!(Role::Reader.permits(CatalogOp::Borrow));
    /// assert!(!Role::Reader.permits(CatalogOp::Remove));
    /// ```
    pub fn permits(&self, op: CatalogOp) -> bool {
        self.operations().contains(&op)
    }

    /// The lowercase name used in CLI flags and prompts
    pub fn name(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Librarian => "librarian",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role {input:?} (expected \"reader\" or \"librarian\")")]
pub struct ParseRoleError {
    /// The string that failed to parse
    pub input: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reader" => Ok(Role::Reader),
            "librarian" => Ok(Role::Librarian),
            _ => Err(ParseRoleError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_operation_subset() {
        assert!(Role::Reader.permits(CatalogOp::List));
        assert!(Role::Reader.permits(CatalogOp::Borrow));
        assert!(Role::Reader.permits(CatalogOp::Return));
        assert!(!Role::Reader.permits(CatalogOp::Add));
        assert!(!Role::Reader.permits(CatalogOp::Remove));
    }

    #[test]
    fn test_librarian_operation_subset() {
        assert!(Role::Librarian.permits(CatalogOp::List));
        assert!(Role::Librarian.permits(CatalogOp::Add));
        assert!(Role::Librarian.permits(CatalogOp::Remove));
        assert!(!Role::Librarian.permits(CatalogOp::Borrow));
        assert!(!Role::Librarian.permits(CatalogOp::Return));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("reader".parse::<Role>().unwrap(), Role::Reader);
        assert_eq!("Librarian".parse::<Role>().unwrap(), Role::Librarian);
        let err = "janitor".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("janitor"));
    }

    #[test]
    fn test_role_display_round_trip() {
        for role in [Role::Reader, Role::Librarian] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
