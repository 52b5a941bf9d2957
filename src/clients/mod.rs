//! HTTP client types for DNSimple API communication.
//!
//! This module provides the transport layer: the request and response
//! types, the injectable [`Transport`] seam, cancellation, and the
//! [`Client`] that drives every call.
//!
//! # Overview
//!
//! - [`Client`]: The API client; resolves, dispatches and decodes calls
//! - [`Transport`]: Async trait that puts one [`HttpRequest`] on the wire
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`HttpRequest`]: A fully resolved request
//! - [`HttpResponse`]: A raw response, with [`RateLimit`] parsed from headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`CancelToken`]: Caller-driven cancellation
//! - [`TransportError`]: Failures that produced no HTTP status
//!
//! # Example
//!
//! ```rust,no_run
//! use dnsimple::{AccessToken, Client, DnsimpleConfig};
//! use dnsimple::clients::CancelToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = Client::new(config)?;
//!
//! let token = CancelToken::new();
//! let cancellable = client.with_cancel_token(token.clone());
//! token.cancel();
//!
//! let result = cancellable.zones().list("1010", None).await;
//! assert!(result.unwrap_err().is_cancelled());
//! # Ok(())
//! # }
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call is a single round trip; 429 and 5xx responses are
//! returned to the caller as classified errors.

mod cancel;
mod client;
mod errors;
mod http_request;
mod http_response;
mod transport;

pub use cancel::CancelToken;
pub use client::{Client, SDK_VERSION};
pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::{ReqwestTransport, Transport};
