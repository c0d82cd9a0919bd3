//! Pretty-printed JSON responses.

use axum::http::HeaderValue;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Like [`axum::Json`], but renders the body with two-space indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(e) => ApiError::Internal(format!("serialization failed: {e}")).into_response(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn renders_indented_json() {
        let response = PrettyJson(serde_json::json!({"a": {"b": 1}})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        assert_eq!(&bytes[..], b"{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }

    #[tokio::test]
    async fn empty_map_renders_braces() {
        let map = std::collections::BTreeMap::<String, String>::new();
        let response = PrettyJson(&map).into_response();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        assert_eq!(&bytes[..], b"{}");
    }
}
