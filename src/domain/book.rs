//! Book records and their ISBN key.
//!
//! [`Isbn`] is a newtype over `String` so catalog keys cannot be confused
//! with author or title strings. It serialises transparently, which keeps
//! the JSON catalog shape `{ "<isbn>": { ...book... } }`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique catalog key for a book.
///
/// No checksum or format validation is applied; any string is a valid key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Creates an `Isbn` from anything string-like.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Reviews attached to a book, keyed by reviewer.
pub type Reviews = BTreeMap<String, String>;

/// A single catalog entry.
///
/// The ISBN is not part of the record; it is the key under which the
/// record is stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Book title.
    pub title: String,
    /// Author name, compared verbatim by author lookups.
    pub author: String,
    /// Reviewer identifier to review text. May be empty.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub reviews: Reviews,
}

impl Book {
    /// Creates a book with no reviews.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            reviews: Reviews::new(),
        }
    }

    /// Adds a review, replacing any earlier review by the same reviewer.
    #[cfg(test)]
    #[must_use]
    pub fn with_review(mut self, reviewer: impl Into<String>, text: impl Into<String>) -> Self {
        self.reviews.insert(reviewer.into(), text.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn isbn_serializes_as_plain_string() {
        let Ok(json) = serde_json::to_string(&Isbn::new("9781")) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"9781\"");
    }

    #[test]
    fn isbn_works_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert(Isbn::new("9781"), Book::new("Dune", "Herbert"));
        let Ok(json) = serde_json::to_value(&map) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"9781": {"title": "Dune", "author": "Herbert", "reviews": {}}})
        );
    }

    #[test]
    fn missing_reviews_default_to_empty() {
        let Ok(book) = serde_json::from_str::<Book>(r#"{"title":"Dune","author":"Herbert"}"#)
        else {
            panic!("deserialization failed");
        };
        assert!(book.reviews.is_empty());
    }

    #[test]
    fn with_review_overwrites_same_reviewer() {
        let book = Book::new("Dune", "Herbert")
            .with_review("ann", "good")
            .with_review("ann", "great");
        assert_eq!(book.reviews.len(), 1);
        assert_eq!(book.reviews.get("ann").map(String::as_str), Some("great"));
    }
}
