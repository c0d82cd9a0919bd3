//! Reqwest-backed client for delegated lookups.
//!
//! The client owns transport details only. It never interprets the status
//! or body it receives; classification into success and relay happens in
//! the public handlers.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Outcome of a delegated GET.
#[derive(Debug, Clone)]
pub enum Delegated {
    /// The data endpoint answered. `status` may be any code.
    Relayed {
        /// Status returned by the data endpoint.
        status: StatusCode,
        /// Raw response body.
        body: Bytes,
    },
    /// No structured response was obtained (connection refused, timeout,
    /// interrupted body). The detail is for logs only.
    TransportFailure(String),
}

/// HTTP client used by the public endpoints to call the data endpoints.
#[derive(Debug, Clone)]
pub struct DelegationClient {
    client: Client,
}

impl DelegationClient {
    /// Builds a client. `timeout` of `None` leaves requests unbounded.
    ///
    /// Proxy environment variables are ignored: delegated calls always
    /// target the origin the inbound request reached.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT).no_proxy();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Issues a GET to `url` and returns the tagged outcome.
    pub async fn get(&self, url: &str) -> Delegated {
        tracing::debug!(url, "delegating lookup");
        let response = match self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => return Delegated::TransportFailure(describe(&error)),
        };

        let status = response.status();
        match response.bytes().await {
            Ok(body) => Delegated::Relayed { status, body },
            Err(error) => Delegated::TransportFailure(describe(&error)),
        }
    }
}

fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("timeout: {error}")
    } else if error.is_connect() {
        format!("connect: {error}")
    } else {
        error.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_transport_failure() {
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        drop(listener);

        let Ok(client) = DelegationClient::new(Some(Duration::from_secs(5))) else {
            panic!("client build failed");
        };
        let outcome = client.get(&format!("http://{addr}/books")).await;
        assert!(matches!(outcome, Delegated::TransportFailure(_)));
    }

    #[tokio::test]
    async fn malformed_url_is_transport_failure() {
        let Ok(client) = DelegationClient::new(None) else {
            panic!("client build failed");
        };
        let outcome = client.get("http://exa mple/books").await;
        assert!(matches!(outcome, Delegated::TransportFailure(_)));
    }
}
