//! Session wrapper: catalog handle plus user identity.
//!
//! Holds the `Catalog` and the session's name/role. Role gating happens at
//! parse time; by the time a command reaches `execute` it is already
//! permitted.

use biblio_catalog::Catalog;
use biblio_core::{BookId, BookRecord, BookSummary, Result, Role};

use crate::parse::CliCommand;

/// Result of one executed command, ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Available books, insertion order
    Listings(Vec<BookSummary>),
    /// The record created by an add
    Added(BookRecord),
    /// The id a remove was applied to (no-op if it was absent)
    Removed(BookId),
    /// A successful borrow
    Borrowed {
        /// Borrowed book id
        id: BookId,
        /// Borrowed book title
        title: String,
    },
    /// A successful return
    Returned {
        /// Returned book id
        id: BookId,
        /// Returned book title
        title: String,
    },
}

/// Wraps the catalog and tracks the session identity.
pub struct SessionState {
    catalog: Catalog,
    name: String,
    role: Role,
}

impl SessionState {
    /// Create a new SessionState around a catalog.
    pub fn new(catalog: Catalog, name: String, role: Role) -> Self {
        Self {
            catalog,
            name,
            role,
        }
    }

    /// Execute a command against the catalog.
    pub fn execute(&self, cmd: CliCommand) -> Result<Output> {
        match cmd {
            CliCommand::List => Ok(Output::Listings(self.catalog.list_available())),
            CliCommand::Borrow { id } => self
                .catalog
                .borrow(id, &self.name)
                .map(|title| Output::Borrowed { id, title }),
            CliCommand::Return { id } => self
                .catalog
                .return_book(id, &self.name)
                .map(|title| Output::Returned { id, title }),
            CliCommand::Add { title, author } => {
                Ok(Output::Added(self.catalog.add(title, author)))
            }
            CliCommand::Remove { id } => {
                self.catalog.remove(id);
                Ok(Output::Removed(id))
            }
        }
    }

    /// Session user name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Session role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        format!("biblio:{}({})> ", self.name, self.role)
    }
}
