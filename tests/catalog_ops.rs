//! Catalog operation walkthroughs
//!
//! End-to-end scenarios through the `biblio` facade: seeding, listing,
//! the borrow/return state machine, and forced removal.

use biblio::{BookId, Catalog, Error, DEFAULT_SHELF};

fn seeded_with_three() -> Catalog {
    let catalog = Catalog::new();
    catalog.add("To Kill a Mockingbird", "Harper Lee");
    catalog.add("1984", "George Orwell");
    catalog.add("Pride and Prejudice", "Jane Austen");
    catalog
}

// ============================================================================
// Listing / borrow / return scenario
// ============================================================================

/// Scenario: seed 3 books, borrow the middle one, return it, list at each step
#[test]
fn test_borrow_return_listing_scenario() {
    let catalog = seeded_with_three();

    let ids = |catalog: &Catalog| -> Vec<u64> {
        catalog
            .list_available()
            .iter()
            .map(|row| row.id.as_u64())
            .collect()
    };

    assert_eq!(ids(&catalog), vec![1, 2, 3]);

    let title = catalog.borrow(BookId::new(2), "Alice").unwrap();
    assert_eq!(title, "1984");
    assert_eq!(ids(&catalog), vec![1, 3]);

    catalog.return_book(BookId::new(2), "Alice").unwrap();
    assert_eq!(ids(&catalog), vec![1, 2, 3]);
}

/// Borrowing twice: the first succeeds, the second fails with the typed error
#[test]
fn test_double_borrow_reports_unavailable() {
    let catalog = seeded_with_three();
    let id = BookId::new(1);

    assert!(catalog.borrow(id, "Alice").is_ok());
    assert_eq!(
        catalog.borrow(id, "Bob"),
        Err(Error::BookUnavailable { id })
    );
}

/// Returning a book nobody borrowed fails with the typed error
#[test]
fn test_return_without_borrow_reports_not_returnable() {
    let catalog = seeded_with_three();
    let id = BookId::new(3);

    assert_eq!(
        catalog.return_book(id, "Alice"),
        Err(Error::NotReturnable { id })
    );
}

// ============================================================================
// Removal semantics
// ============================================================================

/// Removing a borrowed book is permanent: it leaves the listings and can
/// never be borrowed again
#[test]
fn test_remove_borrowed_book_is_permanent() {
    let catalog = seeded_with_three();
    let id = BookId::new(2);

    catalog.borrow(id, "Alice").unwrap();
    catalog.remove(id);

    assert_eq!(catalog.len(), 2);
    assert!(catalog.borrowed_ids().is_empty());
    assert_eq!(catalog.borrow(id, "Bob"), Err(Error::BookUnavailable { id }));
    // A later return of the removed id is equally impossible
    assert_eq!(
        catalog.return_book(id, "Alice"),
        Err(Error::NotReturnable { id })
    );
}

/// Ids keep increasing after removal; a removed id is never reassigned
#[test]
fn test_removed_id_never_reassigned() {
    let catalog = seeded_with_three();
    catalog.remove(BookId::new(2));

    let added = catalog.add("Dune2", "Author X");
    assert_eq!(added.id(), BookId::new(4));

    let surviving: Vec<u64> = catalog
        .snapshot()
        .iter()
        .map(|record| record.id().as_u64())
        .collect();
    assert_eq!(surviving, vec![1, 3, 4]);
}

// ============================================================================
// Seeding
// ============================================================================

/// `Catalog::seeded` always produces a fresh, fully-available shelf
#[test]
fn test_seeded_catalog_matches_default_shelf() {
    let catalog = Catalog::seeded();

    let listed = catalog.list_available();
    assert_eq!(listed.len(), DEFAULT_SHELF.len());
    for (i, row) in listed.iter().enumerate() {
        assert_eq!(row.id.as_u64(), i as u64 + 1);
        assert_eq!(row.title, DEFAULT_SHELF[i].0);
    }
}

/// Adding to an empty catalog starts ids at 1
#[test]
fn test_empty_catalog_assigns_id_one() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());

    let first = catalog.add("Dune2", "Author X");
    let second = catalog.add("Dune3", "Author X");
    assert_eq!(first.id(), BookId::new(1));
    assert_eq!(second.id(), BookId::new(2));
}
