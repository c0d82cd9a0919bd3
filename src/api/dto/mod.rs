//! Data Transfer Objects for REST request/response serialization.
//!
//! Book and catalog responses serialize the domain types directly; error
//! and acknowledgement bodies use [`crate::error::MessageResponse`].

pub mod account_dto;

pub use account_dto::*;
