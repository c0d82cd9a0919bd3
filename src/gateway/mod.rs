//! Delegation gateway: public lookups answered by calling the service's own
//! `/books` data routes over HTTP.
//!
//! [`RequestOrigin`] rebuilds the absolute URL from the inbound request and
//! [`DelegationClient`] performs the GET, reporting a [`Delegated`] outcome
//! that separates a relayed response from a transport failure.

pub mod client;
pub mod target;

pub use client::{Delegated, DelegationClient};
pub use target::{BookQuery, RequestOrigin, encode_component};
