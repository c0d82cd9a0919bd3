//! Registration DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /register`.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation failure rather than a deserialisation error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Desired username. Must be non-empty and unused.
    #[serde(default)]
    pub username: Option<String>,
    /// Password, stored as given. Must be non-empty.
    #[serde(default)]
    pub password: Option<String>,
}
