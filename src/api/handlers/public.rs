//! Public endpoints.
//!
//! `/`, `/isbn/{isbn}`, `/author/{author}` and `/title/{title}` are answered
//! by calling the matching `/books` data route over HTTP on the same origin
//! and relaying the result:
//!
//! - 2xx from the data route: 200 with the body pretty-printed;
//! - any other status: that status and body, unchanged;
//! - no response at all: 500 `{"message":"Error retrieving books"}`.
//!
//! `/review/{isbn}` is answered in-process.

use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::api::response::PrettyJson;
use crate::app_state::AppState;
use crate::domain::Isbn;
use crate::error::{ApiError, MessageResponse};
use crate::gateway::{BookQuery, Delegated, RequestOrigin};

/// `GET /` — Full catalog via `/books`.
///
/// # Errors
///
/// Returns [`ApiError::UpstreamUnavailable`] if the data route cannot be
/// reached.
#[utoipa::path(
    get,
    path = "/",
    tag = "Public",
    summary = "Show the catalog",
    description = "Fetches `/books` on the same origin and returns it pretty-printed.",
    responses(
        (status = 200, description = "Catalog mapping ISBN to book", body = serde_json::Value),
        (status = 500, description = "Data route unreachable", body = MessageResponse),
    )
)]
pub async fn show_catalog(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Result<Response, ApiError> {
    delegate(&state, &origin, BookQuery::All).await
}

/// `GET /isbn/{isbn}` — One book via `/books/isbn/{isbn}`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::UpstreamUnavailable`] if the data route cannot be
/// reached.
#[utoipa::path(
    get,
    path = "/isbn/{isbn}",
    tag = "Public",
    summary = "Show a book by ISBN",
    params(
        ("isbn" = String, Path, description = "Book ISBN"),
    ),
    responses(
        (status = 200, description = "Book record", body = crate::domain::Book),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Data route unreachable", body = MessageResponse),
    )
)]
pub async fn show_book_by_isbn(
    State(state): State<AppState>,
    origin: RequestOrigin,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(isbn) = isbn?;
    delegate(&state, &origin, BookQuery::Isbn(&isbn)).await
}

/// `GET /author/{author}` — Books via `/books/author/{author}`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::UpstreamUnavailable`] if the data route cannot be
/// reached.
#[utoipa::path(
    get,
    path = "/author/{author}",
    tag = "Public",
    summary = "Show books by author",
    params(
        ("author" = String, Path, description = "Author name"),
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = serde_json::Value),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Author not found", body = MessageResponse),
        (status = 500, description = "Data route unreachable", body = MessageResponse),
    )
)]
pub async fn show_books_by_author(
    State(state): State<AppState>,
    origin: RequestOrigin,
    author: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(author) = author?;
    delegate(&state, &origin, BookQuery::Author(&author)).await
}

/// `GET /title/{title}` — Books via `/books/title/{title}`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::UpstreamUnavailable`] if the data route cannot be
/// reached.
#[utoipa::path(
    get,
    path = "/title/{title}",
    tag = "Public",
    summary = "Show books by title",
    params(
        ("title" = String, Path, description = "Book title"),
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = serde_json::Value),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Title not found", body = MessageResponse),
        (status = 500, description = "Data route unreachable", body = MessageResponse),
    )
)]
pub async fn show_books_by_title(
    State(state): State<AppState>,
    origin: RequestOrigin,
    title: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(title) = title?;
    delegate(&state, &origin, BookQuery::Title(&title)).await
}

/// `GET /review/{isbn}` — Reviews of one book.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::BookNotFound`] if the ISBN is unknown.
#[utoipa::path(
    get,
    path = "/review/{isbn}",
    tag = "Public",
    summary = "Show reviews of a book",
    description = "Returns the reviewer-to-text mapping, pretty-printed. An empty object means no reviews.",
    params(
        ("isbn" = String, Path, description = "Book ISBN"),
    ),
    responses(
        (status = 200, description = "Reviews keyed by reviewer", body = serde_json::Value),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
    )
)]
pub async fn show_reviews(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(isbn) = isbn?;
    let isbn = Isbn::from(isbn);
    let reviews = state.catalog_service.get_reviews(&isbn)?;
    Ok(PrettyJson(reviews).into_response())
}

async fn delegate(
    state: &AppState,
    origin: &RequestOrigin,
    query: BookQuery<'_>,
) -> Result<Response, ApiError> {
    let url = origin.url_for(query);
    relay(state.delegation.get(&url).await)
}

/// Maps a delegated outcome to the response sent to the original caller.
///
/// # Errors
///
/// Returns [`ApiError::UpstreamUnavailable`] on a transport failure or when
/// a successful data response is not valid JSON.
pub fn relay(outcome: Delegated) -> Result<Response, ApiError> {
    match outcome {
        Delegated::Relayed { status, body } if status.is_success() => {
            let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
                ApiError::UpstreamUnavailable(format!("data route returned invalid JSON: {e}"))
            })?;
            Ok(PrettyJson(value).into_response())
        }
        Delegated::Relayed { status, body } => {
            tracing::debug!(%status, "relaying data route failure");
            Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
        }
        Delegated::TransportFailure(detail) => Err(ApiError::UpstreamUnavailable(detail)),
    }
}

/// Public routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_catalog))
        .route("/isbn/{isbn}", get(show_book_by_isbn))
        .route("/author/{author}", get(show_books_by_author))
        .route("/title/{title}", get(show_books_by_title))
        .route("/review/{isbn}", get(show_reviews))
}
