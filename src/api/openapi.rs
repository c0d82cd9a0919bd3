//! OpenAPI document for every REST endpoint.

use utoipa::OpenApi;

use crate::api::dto::RegisterRequest;
use crate::api::handlers::{account, books, public, system};
use crate::domain::Book;
use crate::error::MessageResponse;

/// Generated OpenAPI description of the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "book-catalog-gateway",
        description = "Book catalog lookups by ISBN, author and title, plus user registration."
    ),
    paths(
        account::register,
        books::list_books,
        books::get_book_by_isbn,
        books::get_books_by_author,
        books::get_books_by_title,
        public::show_catalog,
        public::show_book_by_isbn,
        public::show_books_by_author,
        public::show_books_by_title,
        public::show_reviews,
        system::health_handler,
    ),
    components(schemas(Book, MessageResponse, RegisterRequest)),
    tags(
        (name = "Accounts", description = "User registration"),
        (name = "Data", description = "Direct catalog lookups"),
        (name = "Public", description = "Pretty-printed lookups delegated to the data routes"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/register",
            "/books",
            "/books/isbn/{isbn}",
            "/books/author/{author}",
            "/books/title/{title}",
            "/",
            "/isbn/{isbn}",
            "/author/{author}",
            "/title/{title}",
            "/review/{isbn}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
