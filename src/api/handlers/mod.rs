//! REST endpoint handlers organized by resource.

pub mod account;
pub mod books;
pub mod public;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the account, data and public routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(account::routes())
        .merge(books::routes())
        .merge(public::routes())
}
