//! Built-in book collection used when no catalog file is configured.

use std::collections::BTreeMap;

use super::book::{Book, Isbn};

const SEED: [(&str, &str, &str); 10] = [
    ("1", "Things Fall Apart", "Chinua Achebe"),
    ("2", "Fairy tales", "Hans Christian Andersen"),
    ("3", "The Divine Comedy", "Dante Alighieri"),
    ("4", "The Epic Of Gilgamesh", "Unknown"),
    ("5", "The Book Of Job", "Unknown"),
    ("6", "One Thousand and One Nights", "Unknown"),
    ("7", "Njál's Saga", "Unknown"),
    ("8", "Pride and Prejudice", "Jane Austen"),
    ("9", "Le Père Goriot", "Honoré de Balzac"),
    (
        "10",
        "Molloy, Malone Dies, The Unnamable, the trilogy",
        "Samuel Beckett",
    ),
];

/// Returns the default ten-book collection, every book without reviews.
#[must_use]
pub fn default_books() -> BTreeMap<Isbn, Book> {
    SEED.iter()
        .map(|(isbn, title, author)| (Isbn::from(*isbn), Book::new(*title, *author)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_ten_books() {
        assert_eq!(default_books().len(), 10);
    }

    #[test]
    fn seed_starts_with_achebe() {
        let books = default_books();
        let first = books.get(&Isbn::from("1"));
        assert_eq!(first.map(|b| b.author.as_str()), Some("Chinua Achebe"));
        assert_eq!(first.map(|b| b.title.as_str()), Some("Things Fall Apart"));
    }

    #[test]
    fn seed_reviews_are_empty() {
        assert!(default_books().values().all(|b| b.reviews.is_empty()));
    }
}
