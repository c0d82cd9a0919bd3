//! Service layer: lookup and registration logic over the domain stores.
//!
//! [`CatalogService`] answers catalog queries; [`AccountService`] handles
//! user registration against the [`super::domain::UserRegistry`].

pub mod account_service;
pub mod catalog_service;

pub use account_service::AccountService;
pub use catalog_service::{CatalogService, QueryResult};
