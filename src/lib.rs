//! # book-catalog-gateway
//!
//! HTTP lookup service for an in-memory book catalog keyed by ISBN, with
//! user registration into an in-memory registry.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Public handlers (api/handlers/public) ──► DelegationClient (gateway/)
//!     │                                                  │  GET same origin
//!     ├── Data handlers (api/handlers/books)   ◄─────────┘
//!     ├── Account handler (api/handlers/account)
//!     │
//!     ├── CatalogService / AccountService (service/)
//!     │
//!     └── CatalogStore (read-only) / UserRegistry (domain/)
//! ```
//!
//! Public lookups reach the catalog through an HTTP round trip to the
//! service's own `/books` routes, so an unreachable data route surfaces as a
//! 500 while a not-found answer is relayed as the original 404.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod service;
