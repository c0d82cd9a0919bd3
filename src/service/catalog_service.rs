//! Catalog lookups by ISBN, author and title.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{Book, CatalogStore, Isbn, Reviews};
use crate::error::ApiError;

/// Books matching an author or title query, keyed by ISBN.
pub type QueryResult = BTreeMap<Isbn, Book>;

/// Read-only query engine over a [`CatalogStore`].
///
/// Author and title queries scan the whole catalog and compare with exact,
/// case-sensitive string equality. There is no trimming, case folding or
/// substring matching; callers must pass the stored value verbatim.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying [`CatalogStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Returns the whole catalog.
    #[must_use]
    pub fn get_all(&self) -> &BTreeMap<Isbn, Book> {
        self.store.books()
    }

    /// Looks up one book by its key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BookNotFound`] if `isbn` is not in the catalog.
    pub fn get_by_isbn(&self, isbn: &Isbn) -> Result<&Book, ApiError> {
        self.store
            .get(isbn)
            .ok_or_else(|| ApiError::BookNotFound(isbn.clone()))
    }

    /// Returns every book whose author equals `author` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthorNotFound`] if no book matches.
    pub fn get_by_author(&self, author: &str) -> Result<QueryResult, ApiError> {
        let result = self.filter(|book| book.author == author);
        tracing::debug!(author, matches = result.len(), "author lookup");
        if result.is_empty() {
            return Err(ApiError::AuthorNotFound(author.to_owned()));
        }
        Ok(result)
    }

    /// Returns every book whose title equals `title` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TitleNotFound`] if no book matches.
    pub fn get_by_title(&self, title: &str) -> Result<QueryResult, ApiError> {
        let result = self.filter(|book| book.title == title);
        tracing::debug!(title, matches = result.len(), "title lookup");
        if result.is_empty() {
            return Err(ApiError::TitleNotFound(title.to_owned()));
        }
        Ok(result)
    }

    /// Returns the reviews of one book. An empty map is a valid result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BookNotFound`] if `isbn` is not in the catalog.
    pub fn get_reviews(&self, isbn: &Isbn) -> Result<&Reviews, ApiError> {
        self.get_by_isbn(isbn).map(|book| &book.reviews)
    }

    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> QueryResult {
        self.store
            .iter()
            .filter(|(_, book)| predicate(book))
            .map(|(isbn, book)| (isbn.clone(), book.clone()))
            .collect()
    }
}
