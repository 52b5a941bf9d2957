//! Transport-level error types.
//!
//! These errors describe failures that happen before an HTTP status is
//! available: the request was malformed, the network failed, or the call was
//! timed out or cancelled. They are kept apart from the status-derived kinds
//! in [`crate::rest::Error`] so a cancelled call can never be mistaken for a
//! 4xx/5xx response.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::clients::TransportError;
//!
//! let error = TransportError::Cancelled;
//! assert_eq!(error.to_string(), "Request was cancelled before a response was received.");
//! ```

use thiserror::Error;

/// Error returned when a request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection-level failure reported by the HTTP backend.
    #[error("Network error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out before a response was received.")]
    Timeout,

    /// The request was cancelled by the caller.
    #[error("Request was cancelled before a response was received.")]
    Cancelled,

    /// The target URL could not be parsed.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that was rejected.
        url: String,
    },

    /// Failure reported by a custom [`Transport`](crate::clients::Transport).
    #[error("Transport failure: {reason}")]
    Other {
        /// Transport-provided reason.
        reason: String,
    },
}

impl TransportError {
    /// Returns `true` if the request was aborted by cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if the request exceeded its deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Connection(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "GET".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot send a request body with GET.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a request body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },

    /// The request URL is empty.
    #[error("Cannot send a request without a URL.")]
    MissingUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_is_distinguishable() {
        let error = TransportError::Cancelled;
        assert!(error.is_cancelled());
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_timeout_is_distinguishable() {
        let error = TransportError::Timeout;
        assert!(error.is_timeout());
        assert!(!error.is_cancelled());
    }

    #[test]
    fn test_other_includes_reason() {
        let error = TransportError::Other {
            reason: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_request_error_body_not_allowed() {
        let error = InvalidHttpRequestError::BodyNotAllowed {
            method: "GET".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a request body with GET.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let transport: &dyn std::error::Error = &TransportError::Timeout;
        let _ = transport;

        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingUrl;
        let _ = invalid;
    }
}
