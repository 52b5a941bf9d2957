//! Error taxonomy for API operations.
//!
//! Every operation returns `Result<Response<T>, Error>`. The [`Error`] enum is
//! closed: local validation failures, the status-derived kinds, transport
//! failures and malformed success bodies.
//!
//! # Error Handling
//!
//! Non-2xx responses are classified by status:
//!
//! - **401**: [`Error::Auth`]
//! - **404**: [`Error::NotFound`]
//! - **422**: [`Error::Validation`] with [`ValidationError::Rejected`], carrying the field errors
//! - **Other 4xx**: [`Error::Client`]
//! - **5xx**: [`Error::Server`] (never retried)
//! - **Anything else**: [`Error::UnexpectedStatus`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::Error;
//!
//! match client.domains().get("1010", "example.com").await {
//!     Ok(response) => println!("Found: {:?}", response.data()),
//!     Err(Error::NotFound(e)) => println!("missing: {}", e.message),
//!     Err(e) if e.field_errors().is_some() => {
//!         for (field, messages) in e.field_errors().unwrap() {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::clients::{HttpResponse, InvalidHttpRequestError, TransportError};

/// The error returned by every API operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected locally before dispatch, or by the server with a 422.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The access token was missing, invalid or expired (HTTP 401).
    #[error("Authentication failed: {0}")]
    Auth(HttpResponseError),

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(HttpResponseError),

    /// Any other 4xx response.
    #[error("Client error: {0}")]
    Client(HttpResponseError),

    /// A 5xx response.
    #[error("Server error: {0}")]
    Server(HttpResponseError),

    /// No HTTP response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 2xx response whose body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A status outside the 2xx/4xx/5xx ranges (e.g. an unfollowed redirect).
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(HttpResponseError),
}

impl Error {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(e)
            | Self::NotFound(e)
            | Self::Client(e)
            | Self::Server(e)
            | Self::UnexpectedStatus(e) => Some(e.status),
            Self::Validation(ValidationError::Rejected { status, .. }) => Some(*status),
            Self::Decode(e) => Some(e.status),
            Self::Validation(_) | Self::Transport(_) => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Auth(e)
            | Self::NotFound(e)
            | Self::Client(e)
            | Self::Server(e)
            | Self::UnexpectedStatus(e) => e.request_id.as_deref(),
            Self::Validation(ValidationError::Rejected { request_id, .. }) => {
                request_id.as_deref()
            }
            Self::Decode(e) => e.request_id.as_deref(),
            Self::Validation(_) | Self::Transport(_) => None,
        }
    }

    /// Returns the per-field messages of a 422 response.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::Validation(ValidationError::Rejected { errors, .. }) => Some(errors),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if the call was cancelled by the caller.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }
}

/// Status, message and request id of a classified error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub status: u16,
    /// The server's `message`, or the raw body when there is none.
    pub message: String,
    /// The `X-Request-Id` header value.
    pub request_id: Option<String>,
}

impl std::fmt::Display for HttpResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " (request id: {id})")?;
        }
        Ok(())
    }
}

/// Validation failures, local or remote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identifier was empty (string) or zero (numeric).
    #[error("Parameter '{parameter}' cannot be empty")]
    EmptyParameter {
        /// The name of the offending parameter (e.g. `accountID`).
        parameter: &'static str,
    },

    /// Fewer identifiers were supplied than the path template requires.
    #[error("Parameter '{parameter}' is required")]
    MissingParameter {
        /// The name of the first unfilled placeholder.
        parameter: &'static str,
    },

    /// More identifiers were supplied than the path template has placeholders.
    #[error("{count} identifier(s) left over after building the path")]
    ExtraIdentifiers {
        /// Number of unused identifiers.
        count: usize,
    },

    /// An option value has no query-string representation.
    #[error("Option '{option}' cannot be encoded as a query parameter")]
    UnencodableOption {
        /// The option name.
        option: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Request body cannot be encoded: {reason}")]
    UnencodableBody {
        /// The serializer's message.
        reason: String,
    },

    /// The assembled HTTP request is malformed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The server rejected the request (HTTP 422).
    #[error("Validation failed: {message}")]
    Rejected {
        /// The HTTP status code (422).
        status: u16,
        /// The server's message.
        message: String,
        /// Field name to ordered messages.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` header value.
        request_id: Option<String>,
    },
}

impl ValidationError {
    /// Returns `true` if this error was produced before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// A 2xx response whose body is not a valid `{data, pagination?}` envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Cannot decode {status} response: {message}")]
pub struct DecodeError {
    /// The HTTP status code.
    pub status: u16,
    /// What went wrong.
    pub message: String,
    /// The `X-Request-Id` header value.
    pub request_id: Option<String>,
}

/// Maps a non-2xx response onto the error taxonomy.
///
/// The body is read as `{"message": ..., "errors": ...}` when it is JSON; a
/// non-JSON body becomes the message verbatim.
#[must_use]
pub fn classify_error(response: &HttpResponse) -> Error {
    let body: serde_json::Value =
        serde_json::from_str(&response.body).unwrap_or(serde_json::Value::Null);
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| response.body.trim().to_string(), ToString::to_string);
    let request_id = response.request_id().map(ToString::to_string);
    let status = response.code;

    tracing::debug!(status, %message, "Classifying error response");

    let detail = || HttpResponseError {
        status,
        message: message.clone(),
        request_id: request_id.clone(),
    };

    match status {
        401 => Error::Auth(detail()),
        404 => Error::NotFound(detail()),
        422 => Error::Validation(ValidationError::Rejected {
            status,
            message: message.clone(),
            errors: parse_validation_errors(&body),
            request_id: request_id.clone(),
        }),
        400..=499 => Error::Client(detail()),
        500..=599 => Error::Server(detail()),
        _ => Error::UnexpectedStatus(detail()),
    }
}

/// Parses validation errors from an error envelope.
///
/// DNSimple returns field errors as an object:
/// ```json
/// {
///   "message": "Validation failed",
///   "errors": { "name": ["is invalid"], "ttl": ["must be positive"] }
/// }
/// ```
///
/// An array or a bare string is filed under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .map(|v| {
                                v.as_str()
                                    .map_or_else(|| v.to_string(), ToString::to_string)
                            })
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        HttpResponse::new(code, headers, body)
    }

    #[test]
    fn test_classify_401_as_auth() {
        let error = classify_error(&response(401, r#"{"message":"Authentication failed"}"#));
        assert!(matches!(&error, Error::Auth(e) if e.message == "Authentication failed"));
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_classify_404_as_not_found() {
        let error = classify_error(&response(404, r#"{"message":"Domain `x` not found"}"#));
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Domain `x` not found"));
    }

    #[test]
    fn test_classify_422_carries_field_errors() {
        let body = json!({
            "message": "Validation failed",
            "errors": {"name": ["is invalid"]}
        });
        let error = classify_error(&response(422, &body.to_string()));

        let errors = error.field_errors().unwrap();
        assert_eq!(errors.get("name"), Some(&vec!["is invalid".to_string()]));
        assert_eq!(error.status(), Some(422));
        assert!(matches!(
            error,
            Error::Validation(ValidationError::Rejected { ref message, .. }) if message == "Validation failed"
        ));
    }

    #[test]
    fn test_classify_other_4xx_as_client() {
        for code in [400, 402, 403, 409, 429] {
            let error = classify_error(&response(code, r#"{"message":"nope"}"#));
            assert!(matches!(&error, Error::Client(e) if e.status == code));
        }
    }

    #[test]
    fn test_classify_5xx_as_server() {
        let error = classify_error(&response(503, "upstream unavailable"));
        assert!(matches!(&error, Error::Server(e) if e.message == "upstream unavailable"));
    }

    #[test]
    fn test_classify_3xx_as_unexpected() {
        let error = classify_error(&response(302, ""));
        assert!(matches!(&error, Error::UnexpectedStatus(e) if e.status == 302));
    }

    #[test]
    fn test_non_json_body_becomes_message() {
        let error = classify_error(&response(400, "  Bad Request\n"));
        assert!(matches!(&error, Error::Client(e) if e.message == "Bad Request"));
    }

    #[test]
    fn test_parse_validation_errors_object_format() {
        let body = json!({
            "errors": {
                "name": ["is invalid"],
                "content": ["can't be blank", "is too short"]
            }
        });

        let errors = parse_validation_errors(&body);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("content").map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_validation_errors_array_and_string_format() {
        let errors = parse_validation_errors(&json!({"errors": ["Error 1", "Error 2"]}));
        assert_eq!(errors.get("base").map(Vec::len), Some(2));

        let errors = parse_validation_errors(&json!({"errors": "Single"}));
        assert_eq!(errors.get("base"), Some(&vec!["Single".to_string()]));

        assert!(parse_validation_errors(&json!({"message": "x"})).is_empty());
    }

    #[test]
    fn test_local_validation_errors_have_no_status() {
        let error = Error::from(ValidationError::EmptyParameter {
            parameter: "accountID",
        });
        assert_eq!(error.status(), None);
        assert!(error.field_errors().is_none());
        assert_eq!(error.to_string(), "Parameter 'accountID' cannot be empty");
    }

    #[test]
    fn test_cancelled_is_not_a_status_error() {
        let error = Error::from(TransportError::Cancelled);
        assert!(error.is_cancelled());
        assert_eq!(error.status(), None);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_is_local() {
        assert!(ValidationError::ExtraIdentifiers { count: 1 }.is_local());
        assert!(!ValidationError::Rejected {
            status: 422,
            message: String::new(),
            errors: HashMap::new(),
            request_id: None,
        }
        .is_local());
    }
}
