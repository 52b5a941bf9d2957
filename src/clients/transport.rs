//! The HTTP transport seam.
//!
//! [`Transport`] is the only place the client touches the network. The
//! default [`ReqwestTransport`] sends requests with `reqwest`; tests and
//! embedders can inject their own implementation through
//! [`Client::with_transport`](crate::Client::with_transport).
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use dnsimple::clients::{HttpRequest, HttpResponse, Transport, TransportError};
//! use std::collections::HashMap;
//!
//! #[derive(Debug)]
//! struct AlwaysNoContent;
//!
//! #[async_trait]
//! impl Transport for AlwaysNoContent {
//!     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::new(204, HashMap::new(), ""))
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::error::ConfigError;

/// Executes a fully resolved HTTP request.
///
/// Implementations return `Ok` for every response that carries an HTTP
/// status, including 4xx and 5xx. Only failures with no status (network
/// errors, timeouts) are reported as [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Sends `request` and returns the raw response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by `reqwest` with rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client, sharing its connection pool.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn map_error(url: &str, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_builder() {
            TransportError::InvalidUrl {
                url: url.to_string(),
            }
        } else {
            TransportError::Connection(error)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let mut req_builder = self.client.request(request.http_method.into(), url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body_text() {
            req_builder = req_builder.body(body);
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| Self::map_error(url, e))?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.map_err(|e| Self::map_error(url, e))?;

        Ok(HttpResponse::new(code, headers, body))
    }
}
