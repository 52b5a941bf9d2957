//! HTTP response types returned by a [`Transport`](crate::clients::Transport).
//!
//! The body is kept as raw text. Interpreting it (envelope decoding, error
//! classification) is the job of [`crate::rest`], which needs to tell an
//! empty `204` body apart from a malformed one.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["2400".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["2399".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1700000000".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 2400);
/// assert_eq!(limit.remaining, 2399);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum number of requests allowed per hour.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the window resets.
    pub reset: i64,
}

impl RateLimit {
    /// Parses rate limit headers. Returns `None` unless all three are present
    /// and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|value| value.trim())
        };

        Some(Self {
            limit: first("x-ratelimit-limit")?.parse().ok()?,
            remaining: first("x-ratelimit-remaining")?.parse().ok()?,
            reset: first("x-ratelimit-reset")?.parse().ok()?,
        })
    }
}

/// An HTTP response from the DNSimple API.
///
/// Header names are lowercased so lookups are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body. Empty for `204 No Content`.
    pub body: String,
    /// Rate limit information, when the server reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, normalizing header names and parsing
    /// the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }

        let rate_limit = RateLimit::from_headers(&normalized);

        Self {
            code,
            headers: normalized,
            body: body.into(),
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Include this ID when reporting issues to DNSimple support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
