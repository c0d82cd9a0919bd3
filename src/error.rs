//! API error type with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for request handling. Each variant
//! maps to an HTTP status code and a fixed client-facing message; the
//! `Display` text carries detail for logs only.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Isbn;

/// Message returned to clients when a delegated lookup cannot be completed.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error retrieving books";

/// JSON body used for every error and for plain acknowledgements.
///
/// ```json
/// { "message": "Book not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request-level failures.
///
/// | Variant                | Category            | HTTP Status |
/// |------------------------|---------------------|-------------|
/// | `MissingCredentials`   | Bad request         | 400         |
/// | `InvalidPathParameter` | Bad request         | 400         |
/// | `UserAlreadyExists`    | Conflict            | 409         |
/// | `*NotFound`            | Not found           | 404         |
/// | `UpstreamUnavailable`  | Delegation failure  | 500         |
/// | `Internal`             | Server              | 500         |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Username or password missing or empty.
    #[error("username and password are required")]
    MissingCredentials,

    /// A path segment could not be decoded, e.g. invalid UTF-8.
    #[error("invalid path parameter: {0}")]
    InvalidPathParameter(String),

    /// A user with this username is already registered.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    /// No book is stored under the ISBN.
    #[error("book not found: {0}")]
    BookNotFound(Isbn),

    /// No book has exactly this author.
    #[error("author not found: {0}")]
    AuthorNotFound(String),

    /// No book has exactly this title.
    #[error("title not found: {0}")]
    TitleNotFound(String),

    /// The delegated call produced no usable response.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::InvalidPathParameter(_) => StatusCode::BAD_REQUEST,
            Self::UserAlreadyExists(_) => StatusCode::CONFLICT,
            Self::BookNotFound(_) | Self::AuthorNotFound(_) | Self::TitleNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::UpstreamUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Never includes the variant's detail, so transport errors and lookup
    /// keys do not leak into responses.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "Username and password are required",
            Self::InvalidPathParameter(_) => "Invalid path parameter",
            Self::UserAlreadyExists(_) => "User already exists",
            Self::BookNotFound(_) => "Book not found",
            Self::AuthorNotFound(_) => "Author not found",
            Self::TitleNotFound(_) => "Title not found",
            Self::UpstreamUnavailable(_) => UPSTREAM_FAILURE_MESSAGE,
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPathParameter(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = MessageResponse::new(self.public_message());
        (status, axum::Json(body)).into_response()
    }
}
