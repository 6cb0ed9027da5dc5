//! Embedded default shelf
//!
//! The stock catalog a fresh library starts from. This is static
//! configuration data, not behavior: [`crate::Catalog::seeded`] assigns ids
//! 1..=N in the order listed here.

/// Default `(title, author)` pairs, seeded in order
pub const DEFAULT_SHELF: &[(&str, &str)] = &[
    ("To Kill a Mockingbird", "Harper Lee"),
    ("1984", "George Orwell"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("Moby Dick", "Herman Melville"),
    ("War and Peace", "Leo Tolstoy"),
    ("The Catcher in the Rye", "J.D. Salinger"),
    ("The Lord of the Rings", "J.R.R. Tolkien"),
    ("Animal Farm", "George Orwell"),
    ("The Hobbit", "J.R.R. Tolkien"),
    ("Fahrenheit 451", "Ray Bradbury"),
    ("Jane Eyre", "Charlotte Bronte"),
    ("Brave New World", "Aldous Huxley"),
    ("Wuthering Heights", "Emily Bronte"),
    ("Crime and Punishment", "Fyodor Dostoevsky"),
    ("Great Expectations", "Charles Dickens"),
    ("The Odyssey", "Homer"),
    ("Les Misérables", "Victor Hugo"),
    ("Anna Karenina", "Leo Tolstoy"),
    ("Ulysses", "James Joyce"),
    ("Don Quixote", "Miguel de Cervantes"),
    ("The Iliad", "Homer"),
    ("Dracula", "Bram Stoker"),
    ("The Count of Monte Cristo", "Alexandre Dumas"),
    ("A Tale of Two Cities", "Charles Dickens"),
    ("The Picture of Dorian Gray", "Oscar Wilde"),
    ("Frankenstein", "Mary Shelley"),
    ("The Grapes of Wrath", "John Steinbeck"),
    ("The Alchemist", "Paulo Coelho"),
    ("Catch-22", "Joseph Heller"),
    ("One Hundred Years of Solitude", "Gabriel Garcia Marquez"),
    ("Beloved", "Toni Morrison"),
    ("The Brothers Karamazov", "Fyodor Dostoevsky"),
    ("Lolita", "Vladimir Nabokov"),
    ("Slaughterhouse-Five", "Kurt Vonnegut"),
    ("David Copperfield", "Charles Dickens"),
    ("The Secret Garden", "Frances Hodgson Burnett"),
    ("The Little Prince", "Antoine de Saint-Exupéry"),
    ("Alice's Adventures in Wonderland", "Lewis Carroll"),
    ("The Divine Comedy", "Dante Alighieri"),
    ("The Road", "Cormac McCarthy"),
    ("Gulliver's Travels", "Jonathan Swift"),
    ("The Time Machine", "H.G. Wells"),
    ("The Stranger", "Albert Camus"),
    ("The Sun Also Rises", "Ernest Hemingway"),
    ("A Clockwork Orange", "Anthony Burgess"),
    ("Madame Bovary", "Gustave Flaubert"),
    ("Of Mice and Men", "John Steinbeck"),
    ("Treasure Island", "Robert Louis Stevenson"),
    ("Dune", "Frank Herbert"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_has_fifty_entries() {
        assert_eq!(DEFAULT_SHELF.len(), 50);
    }

    #[test]
    fn test_shelf_entries_nonempty() {
        for (title, author) in DEFAULT_SHELF {
            assert!(!title.is_empty());
            assert!(!author.is_empty());
        }
    }
}
