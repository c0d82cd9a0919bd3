//! Registration endpoint.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::RegisterRequest;
use crate::app_state::AppState;
use crate::error::{ApiError, MessageResponse};

/// `POST /register` — Register a new user.
///
/// A missing, malformed or non-JSON body is treated like a body with no
/// fields.
///
/// # Errors
///
/// Returns [`ApiError::MissingCredentials`] on missing or empty fields and
/// [`ApiError::UserAlreadyExists`] if the username is taken.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Accounts",
    summary = "Register a user",
    description = "Stores a new username/password pair. Usernames are unique and compared exactly.",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Username or password missing", body = MessageResponse),
        (status = 409, description = "Username already taken", body = MessageResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable registration body");
            RegisterRequest::default()
        }
    };

    state
        .account_service
        .register(req.username, req.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Account routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}
