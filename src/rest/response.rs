//! Envelope decoding and the typed response wrapper.
//!
//! Successful responses arrive as `{"data": ..., "pagination": {...}?}`.
//! [`decode_response`] is generic over the payload type, so the same code
//! decodes a single object (`Response<Domain>`) and an ordered collection
//! (`Response<Vec<Domain>>`).
//!
//! # Decoding rules
//!
//! - 2xx with an empty body, or an action endpoint: `data` is `None` and
//!   nothing is decoded
//! - 2xx with a body: must be a JSON object holding `data`; anything else is
//!   a [`DecodeError`]
//! - non-2xx: handed to [`classify_error`]
//!
//! # Example
//!
//! ```rust
//! use dnsimple::clients::HttpResponse;
//! use dnsimple::rest::decode_response;
//! use std::collections::HashMap;
//!
//! let raw = HttpResponse::new(
//!     200,
//!     HashMap::new(),
//!     r#"{"data":[1,2,3],"pagination":{"current_page":1,"per_page":3,"total_entries":9,"total_pages":3}}"#,
//! );
//!
//! let response = decode_response::<Vec<u32>>(raw, true).unwrap();
//! assert_eq!(response.data(), Some(&vec![1, 2, 3]));
//! assert_eq!(response.pagination().unwrap().total_pages, 3);
//! assert!(response.has_next_page());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::errors::{classify_error, DecodeError, Error};

/// Pagination metadata returned with list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page that was returned (1-based).
    pub current_page: u32,
    /// Entries per page.
    pub per_page: u32,
    /// Total entries across all pages.
    pub total_entries: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

/// A decoded API response.
///
/// Pairs the payload with the raw HTTP response so callers can reach status,
/// headers and rate-limit details.
#[derive(Debug, Clone)]
pub struct Response<T> {
    data: Option<T>,
    pagination: Option<Pagination>,
    http_response: HttpResponse,
}

impl<T> Response<T> {
    /// Returns the decoded payload. `None` for empty-bodied successes.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the response and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns the pagination metadata, if the envelope carried any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns `true` if there is a page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination
            .is_some_and(|p| p.current_page < p.total_pages)
    }

    /// Returns the raw HTTP response.
    #[must_use]
    pub const fn http_response(&self) -> &HttpResponse {
        &self.http_response
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.http_response.code
    }

    /// Returns rate limit information, if the server reported it.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.http_response.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.http_response.request_id()
    }

    /// Transforms the payload, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: self.data.map(f),
            pagination: self.pagination,
            http_response: self.http_response,
        }
    }
}

/// Decodes `response` into a typed [`Response`], or classifies it as an error.
///
/// When `expects_data` is `false` a successful body is not inspected.
///
/// # Errors
///
/// - [`Error::Decode`] for a 2xx body that is not a `{data, pagination?}` envelope of `T`
/// - the kind chosen by [`classify_error`] for a non-2xx status
pub fn decode_response<T: DeserializeOwned>(
    response: HttpResponse,
    expects_data: bool,
) -> Result<Response<T>, Error> {
    if !response.is_ok() {
        return Err(classify_error(&response));
    }

    if !expects_data || response.is_body_empty() {
        return Ok(Response {
            data: None,
            pagination: None,
            http_response: response,
        });
    }

    let decode_error = |message: String| DecodeError {
        status: response.code,
        message,
        request_id: response.request_id().map(ToString::to_string),
    };

    let mut envelope: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| decode_error(format!("malformed JSON: {e}")))?;

    let Some(object) = envelope.as_object_mut() else {
        return Err(decode_error("expected a JSON object envelope".to_string()).into());
    };

    let data = object
        .remove("data")
        .ok_or_else(|| decode_error("envelope has no `data` field".to_string()))?;
    let data: Option<T> = serde_json::from_value(data)
        .map_err(|e| decode_error(format!("unexpected `data` shape: {e}")))?;

    let pagination = match object.remove("pagination") {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(
            serde_json::from_value::<Pagination>(value)
                .map_err(|e| decode_error(format!("unexpected `pagination` shape: {e}")))?,
        ),
    };

    Ok(Response {
        data,
        pagination,
        http_response: response,
    })
}

// Verify Response is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Response<Vec<String>>>();
};
