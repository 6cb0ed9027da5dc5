//! Catalog: the book collection behind a single lock
//!
//! This module implements the catalog state machine using:
//! - `Vec<BookRecord>` for the insertion-ordered collection
//! - `FxHashSet<BookId>` as a secondary index of currently-borrowed ids
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for monotonically increasing id allocation
//!
//! # Design Notes
//!
//! - **One guard for every mutation**: add/remove/borrow/return all take the
//!   same write lock, so a scan can never observe a half-updated collection.
//! - **Ids are never reused**: allocation is a counter `fetch_add`, decoupled
//!   from the collection size, so removing a book from the middle of the
//!   collection cannot make a later add collide with a surviving id.
//! - **Index updated in the same critical section**: the borrowed-id set and
//!   the per-record flags change together, under the write lock.
//! - **No I/O under the lock**: tracing events fire after the guard drops.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use tracing::info;

use biblio_core::{BookId, BookRecord, BookSummary, Error, Result};

use crate::seed::DEFAULT_SHELF;

/// Collection state guarded by the catalog's lock
#[derive(Debug)]
struct Inner {
    /// All records, insertion order preserved
    records: Vec<BookRecord>,
    /// Secondary index: ids of currently-borrowed records
    borrowed: FxHashSet<BookId>,
}

/// The book catalog: single source of truth for the collection
///
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`. Borrow and
/// return are mutually exclusive with each other and with add/remove;
/// exactly one scan-and-mutate sequence runs at a time. Listing takes the
/// shared read lock.
///
/// Lock hold time is bounded by one linear scan of the collection.
///
/// # Example
///
/// ```
/// use biblio_catalog::Catalog;
///
/// let catalog = Catalog::new();
/// let book = catalog.add("Dune", "Frank Herbert");
///
/// let title = catalog.borrow(book.id(), "alice").unwrap();
/// assert_eq!(title, "Dune");
/// assert!(catalog.borrow(book.id(), "bob").is_err());
///
/// catalog.return_book(book.id(), "alice").unwrap();
/// assert_eq!(catalog.list_available().len(), 1);
/// ```
#[derive(Debug)]
pub struct Catalog {
    inner: RwLock<Inner>,
    /// Last allocated id; the next add receives `next_id + 1`
    next_id: AtomicU64,
}

impl Catalog {
    /// Create an empty catalog
    ///
    /// The first added book receives id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                borrowed: FxHashSet::default(),
            }),
            next_id: AtomicU64::new(0),
        }
    }

    /// Create a fresh catalog populated from the default shelf
    ///
    /// Seeds [`DEFAULT_SHELF`] in order with ids 1..=N, everything
    /// available. Nothing is loaded from prior runs.
    pub fn seeded() -> Self {
        let records: Vec<BookRecord> = DEFAULT_SHELF
            .iter()
            .enumerate()
            .map(|(i, (title, author))| BookRecord::new(BookId::new(i as u64 + 1), *title, *author))
            .collect();
        let seeded = records.len() as u64;
        Self {
            inner: RwLock::new(Inner {
                records,
                borrowed: FxHashSet::default(),
            }),
            next_id: AtomicU64::new(seeded),
        }
    }

    /// Allocate the next id atomically
    ///
    /// `fetch_add` keeps ids unique and monotonically increasing
    /// (1, 2, 3, ...) across threads, and removal never returns an id to
    /// the pool.
    fn allocate_id(&self) -> BookId {
        BookId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Add a new book, returning the created record
    ///
    /// The record starts available. Concurrent adds receive distinct ids.
    pub fn add(&self, title: impl Into<String>, author: impl Into<String>) -> BookRecord {
        let record = BookRecord::new(self.allocate_id(), title, author);
        {
            let mut inner = self.inner.write();
            inner.records.push(record.clone());
        }
        info!(
            id = %record.id(),
            title = record.title(),
            author = record.author(),
            "book added"
        );
        record
    }

    /// Remove the book with the given id
    ///
    /// No-op if the id is absent. A currently-borrowed book is removed
    /// anyway (forced removal, not a return): its id is also discarded from
    /// the borrowed index.
    pub fn remove(&self, id: BookId) {
        let removed = {
            let mut guard = self.inner.write();
            let inner = &mut *guard;
            let before = inner.records.len();
            inner.records.retain(|r| r.id() != id);
            inner.borrowed.remove(&id);
            inner.records.len() != before
        };
        if removed {
            info!(%id, "book removed");
        }
    }

    /// List every available book, in insertion order
    ///
    /// Side-effect-free; takes the shared read lock.
    pub fn list_available(&self) -> Vec<BookSummary> {
        let inner = self.inner.read();
        inner
            .records
            .iter()
            .filter(|r| !r.is_borrowed())
            .map(BookRecord::summary)
            .collect()
    }

    /// Borrow the book with the given id
    ///
    /// On success the record is flagged, indexed, and its title returned.
    /// Fails with [`Error::BookUnavailable`] if the id does not exist or
    /// the book is already borrowed. The scan-and-mutate sequence is atomic
    /// under the write lock.
    pub fn borrow(&self, id: BookId, borrower: &str) -> Result<String> {
        let title = {
            let mut guard = self.inner.write();
            let inner = &mut *guard;
            let record = inner
                .records
                .iter_mut()
                .find(|r| r.id() == id && !r.is_borrowed())
                .ok_or(Error::BookUnavailable { id })?;
            record.mark_borrowed();
            inner.borrowed.insert(id);
            record.title().to_string()
        };
        info!(%id, borrower, %title, "book borrowed");
        Ok(title)
    }

    /// Return the book with the given id
    ///
    /// On success the flag is cleared, the id leaves the borrowed index,
    /// and the title is returned. Fails with [`Error::NotReturnable`] if
    /// the id does not exist or the book is not currently borrowed. Atomic
    /// under the same guard as [`Catalog::borrow`].
    pub fn return_book(&self, id: BookId, borrower: &str) -> Result<String> {
        let title = {
            let mut guard = self.inner.write();
            let inner = &mut *guard;
            let record = inner
                .records
                .iter_mut()
                .find(|r| r.id() == id && r.is_borrowed())
                .ok_or(Error::NotReturnable { id })?;
            record.mark_returned();
            inner.borrowed.remove(&id);
            record.title().to_string()
        };
        info!(%id, borrower, %title, "book returned");
        Ok(title)
    }

    /// Clone of every record, insertion order preserved
    pub fn snapshot(&self) -> Vec<BookRecord> {
        self.inner.read().records.clone()
    }

    /// Ids of currently-borrowed books, sorted ascending
    pub fn borrowed_ids(&self) -> Vec<BookId> {
        let mut ids: Vec<BookId> = self.inner.read().borrowed.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of records in the catalog (borrowed or not)
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
