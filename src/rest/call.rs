//! A single bound API call, ready for dispatch.

use serde::Serialize;

use crate::clients::HttpMethod;
use crate::rest::errors::ValidationError;
use crate::rest::path::{Endpoint, Identifier};
use crate::rest::query::encode_options;

/// An [`Endpoint`] with its identifiers, query options and body applied.
///
/// Building a `Call` performs every local validation step, so a `Call` that
/// exists can always be dispatched. Hand it to
/// [`Client::execute`](crate::Client::execute).
///
/// # Example
///
/// ```rust
/// use dnsimple::rest::{Call, Endpoint, ListOptions};
/// use dnsimple::clients::HttpMethod;
///
/// const LIST: Endpoint<Vec<serde_json::Value>> =
///     Endpoint::new(HttpMethod::Get, "{accountID}/zones");
///
/// let call = Call::new(&LIST, &["1010".into()])
///     .unwrap()
///     .query(Some(&ListOptions::new().page(2)))
///     .unwrap();
/// assert_eq!(call.path(), "/1010/zones?page=2");
/// ```
#[derive(Debug)]
pub struct Call<T> {
    endpoint: Endpoint<T>,
    path: String,
    body: Option<serde_json::Value>,
}

impl<T> Call<T> {
    /// Resolves `endpoint` against `ids`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an identifier is empty or the count
    /// does not match the template.
    pub fn new(endpoint: &Endpoint<T>, ids: &[Identifier<'_>]) -> Result<Self, ValidationError> {
        let path = endpoint.path(ids)?.to_string();
        Ok(Self {
            endpoint: *endpoint,
            path,
            body: None,
        })
    }

    /// Appends encoded list options.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnencodableOption`] if an option has no
    /// query-string form.
    pub fn query<O: Serialize + ?Sized>(
        mut self,
        options: Option<&O>,
    ) -> Result<Self, ValidationError> {
        self.path = encode_options(&self.path, options)?;
        Ok(self)
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnencodableBody`] if `body` fails to
    /// serialize.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ValidationError> {
        let value = serde_json::to_value(body).map_err(|e| ValidationError::UnencodableBody {
            reason: e.to_string(),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.endpoint.method
    }

    /// Returns the unversioned path, including any query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body_value(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Returns `false` if the success body should not be decoded.
    #[must_use]
    pub const fn expects_data(&self) -> bool {
        self.endpoint.expects_data()
    }

    pub(crate) fn into_parts(self) -> (HttpMethod, String, Option<serde_json::Value>) {
        (self.endpoint.method, self.path, self.body)
    }
}
