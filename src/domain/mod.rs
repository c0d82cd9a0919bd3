//! Domain layer: book records, the read-only catalog, and the user registry.
//!
//! The catalog is immutable after startup; the user registry is the only
//! state mutated while serving requests.

pub mod book;
pub mod catalog;
pub mod seed;
pub mod user_registry;

pub use book::{Book, Isbn, Reviews};
pub use catalog::{CatalogLoadError, CatalogStore};
pub use user_registry::{User, UserRegistry};
