//! Data endpoints: direct catalog lookups under `/books`.
//!
//! These routes answer from the in-process [`crate::service::CatalogService`]
//! and are also the targets of the delegated public routes.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Book, Isbn};
use crate::error::{ApiError, MessageResponse};

/// `GET /books` — Full catalog.
#[utoipa::path(
    get,
    path = "/books",
    tag = "Data",
    summary = "List the catalog",
    description = "Returns every book keyed by ISBN.",
    responses(
        (status = 200, description = "Catalog mapping ISBN to book", body = serde_json::Value),
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Response {
    Json(state.catalog_service.get_all()).into_response()
}

/// `GET /books/isbn/{isbn}` — One book by ISBN.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::BookNotFound`] if the ISBN is unknown.
#[utoipa::path(
    get,
    path = "/books/isbn/{isbn}",
    tag = "Data",
    summary = "Get a book by ISBN",
    params(
        ("isbn" = String, Path, description = "Book ISBN"),
    ),
    responses(
        (status = 200, description = "Book record", body = Book),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(isbn) = isbn?;
    let isbn = Isbn::from(isbn);
    let book = state.catalog_service.get_by_isbn(&isbn)?;
    Ok(Json(book).into_response())
}

/// `GET /books/author/{author}` — Books with exactly this author.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::AuthorNotFound`] if no book matches.
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    tag = "Data",
    summary = "Get books by author",
    description = "Case-sensitive exact match on the author field.",
    params(
        ("author" = String, Path, description = "Author name"),
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = serde_json::Value),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Author not found", body = MessageResponse),
    )
)]
pub async fn get_books_by_author(
    State(state): State<AppState>,
    author: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(author) = author?;
    let books = state.catalog_service.get_by_author(&author)?;
    Ok(Json(books))
}

/// `GET /books/title/{title}` — Books with exactly this title.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPathParameter`] if the segment cannot be
/// decoded.
///
/// Returns [`ApiError::TitleNotFound`] if no book matches.
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    tag = "Data",
    summary = "Get books by title",
    description = "Case-sensitive exact match on the title field.",
    params(
        ("title" = String, Path, description = "Book title"),
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = serde_json::Value),
        (status = 400, description = "Undecodable path parameter", body = MessageResponse),
        (status = 404, description = "Title not found", body = MessageResponse),
    )
)]
pub async fn get_books_by_title(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(title) = title?;
    let books = state.catalog_service.get_by_title(&title)?;
    Ok(Json(books))
}

/// Data routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/isbn/{isbn}", get(get_book_by_isbn))
        .route("/books/author/{author}", get(get_books_by_author))
        .route("/books/title/{title}", get(get_books_by_title))
}
