//! Construction of delegated request URLs.
//!
//! A delegated lookup targets this same service: the scheme and host come
//! from the inbound request, the path is one of the `/books` data routes,
//! and the path parameter is percent-encoded with the `encodeURIComponent`
//! character set.

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Characters left unescaped: alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Percent-encodes a single path segment.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Data route a public endpoint delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookQuery<'a> {
    /// `GET /books`
    All,
    /// `GET /books/isbn/{isbn}`
    Isbn(&'a str),
    /// `GET /books/author/{author}`
    Author(&'a str),
    /// `GET /books/title/{title}`
    Title(&'a str),
}

impl BookQuery<'_> {
    /// Returns the encoded request path for this query.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::All => "/books".to_owned(),
            Self::Isbn(isbn) => format!("/books/isbn/{}", encode_component(isbn)),
            Self::Author(author) => format!("/books/author/{}", encode_component(author)),
            Self::Title(title) => format!("/books/title/{}", encode_component(title)),
        }
    }
}

/// Scheme and host the inbound request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    scheme: &'static str,
    host: String,
}

impl RequestOrigin {
    /// Derives the origin from request headers and URI.
    ///
    /// The host comes from the `Host` header, falling back to the URI
    /// authority. The scheme is `http` unless `trust_forwarded_proto` is set
    /// and `X-Forwarded-Proto` names `https`. Returns `None` when no host is
    /// available.
    #[must_use]
    pub fn from_headers(
        headers: &HeaderMap,
        uri: &Uri,
        trust_forwarded_proto: bool,
    ) -> Option<Self> {
        let host = headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| uri.authority().map(|a| a.as_str()))
            .map(str::trim)
            .filter(|h| !h.is_empty())?;

        let scheme = if trust_forwarded_proto {
            forwarded_scheme(headers)
        } else {
            "http"
        };

        Some(Self {
            scheme,
            host: host.to_owned(),
        })
    }

    /// Returns the scheme, `http` or `https`.
    #[cfg(test)]
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme
    }

    /// Returns the host, including the port when one was given.
    #[cfg(test)]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Builds the absolute URL of a data route on this origin.
    #[must_use]
    pub fn url_for(&self, query: BookQuery<'_>) -> String {
        format!("{}://{}{}", self.scheme, self.host, query.path())
    }
}

fn forwarded_scheme(headers: &HeaderMap) -> &'static str {
    let first = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);
    match first {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers, &parts.uri, state.trust_forwarded_proto)
            .ok_or_else(|| {
                ApiError::UpstreamUnavailable("request carries no host to delegate to".to_owned())
            })
    }
}
