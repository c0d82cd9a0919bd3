//! Read-only book catalog.
//!
//! [`CatalogStore`] is built once at startup, either from the built-in seed
//! or from a JSON file shaped `{ "<isbn>": { "title", "author", "reviews" } }`,
//! and is never mutated afterwards. It is shared between handlers behind an
//! `Arc` without any lock.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::book::{Book, Isbn};
use super::seed;

/// Errors raised while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid catalog document.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable mapping from ISBN to [`Book`].
///
/// Keys are unique by construction. Iteration order is the lexicographic
/// order of the ISBN strings.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    books: BTreeMap<Isbn, Book>,
}

impl CatalogStore {
    /// Wraps an existing collection.
    #[must_use]
    pub fn new(books: BTreeMap<Isbn, Book>) -> Self {
        Self { books }
    }

    /// Builds the store from the built-in ten-book collection.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::default_books())
    }

    /// Parses a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Parse`] if the document is not an object
    /// of book records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let books: BTreeMap<Isbn, Book> = serde_json::from_str(json)?;
        Ok(Self::new(books))
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Io`] if the file cannot be read and
    /// [`CatalogLoadError::Parse`] if its contents are invalid.
    pub async fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), books = store.len(), "catalog loaded");
        Ok(store)
    }

    /// Returns the book stored under `isbn`, if any.
    #[must_use]
    pub fn get(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Returns the full collection.
    #[must_use]
    pub fn books(&self) -> &BTreeMap<Isbn, Book> {
        &self.books
    }

    /// Iterates over every `(isbn, book)` pair in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Isbn, &Book)> {
        self.books.iter()
    }

    /// Returns the number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_json_str_reads_books_and_reviews() {
        let json = r#"{
            "9781": {"title": "Dune", "author": "Herbert", "reviews": {"ann": "classic"}},
            "9782": {"title": "Emma", "author": "Austen"}
        }"#;
        let Ok(store) = CatalogStore::from_json_str(json) else {
            panic!("valid catalog rejected");
        };
        assert_eq!(store.len(), 2);
        let Some(dune) = store.get(&Isbn::from("9781")) else {
            panic!("missing book");
        };
        assert_eq!(dune.reviews.get("ann").map(String::as_str), Some("classic"));
    }

    #[test]
    fn from_json_str_rejects_arrays() {
        let result = CatalogStore::from_json_str(r#"[{"title": "Dune"}]"#);
        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let result = CatalogStore::load(Path::new("/nonexistent/catalog.json")).await;
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[test]
    fn seeded_is_not_empty() {
        let store = CatalogStore::seeded();
        assert!(!store.is_empty());
        assert_eq!(store.iter().count(), store.len());
    }

    #[test]
    fn default_is_empty() {
        assert!(CatalogStore::default().is_empty());
    }
}
