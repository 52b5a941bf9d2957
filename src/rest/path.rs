//! Path building for API endpoints.
//!
//! Every endpoint is described by an [`Endpoint`]: an HTTP method, a path
//! template with `{placeholder}` segments, and the payload type the success
//! envelope carries. Filling the template with [`Identifier`]s yields a
//! validated [`ResourcePath`].
//!
//! # Validation
//!
//! Identifiers are checked in template order. The first empty string or zero
//! id fails with [`ValidationError::EmptyParameter`] naming that placeholder;
//! later identifiers are not inspected.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::rest::{Endpoint, Identifier};
//! use dnsimple::clients::HttpMethod;
//!
//! const GET_RECORD: Endpoint<serde_json::Value> = Endpoint::new(
//!     HttpMethod::Get,
//!     "{accountID}/templates/{templateIdentifier}/records/{recordID}",
//! );
//!
//! let path = GET_RECORD
//!     .path(&["1010".into(), "alpha".into(), Identifier::Id(7)])
//!     .unwrap();
//! assert_eq!(path.to_string(), "/1010/templates/alpha/records/7");
//!
//! let error = GET_RECORD
//!     .path(&["1010".into(), "".into(), Identifier::Id(7)])
//!     .unwrap_err();
//! assert_eq!(error.to_string(), "Parameter 'templateIdentifier' cannot be empty");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::clients::HttpMethod;
use crate::rest::errors::ValidationError;

/// A resource identifier: account id, domain name, template sid, record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// A string identifier (name, sid, token, or a numeric id in string form).
    Name(&'a str),
    /// A numeric identifier.
    Id(i64),
}

impl Identifier<'_> {
    /// Returns `true` for a blank string or a zero id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Name(name) => name.trim().is_empty(),
            Self::Id(id) => *id == 0,
        }
    }

    fn segment(&self) -> String {
        match self {
            Self::Name(name) => urlencoding::encode(name).into_owned(),
            Self::Id(id) => id.to_string(),
        }
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(value: &'a String) -> Self {
        Self::Name(value.as_str())
    }
}

impl From<i64> for Identifier<'_> {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// A validated, unversioned resource path such as `/1010/domains/example.com`.
///
/// Immutable once built. Apply [`ApiVersion::prefixed`](crate::ApiVersion::prefixed)
/// to prefix it before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Incremental builder for a [`ResourcePath`].
///
/// Each [`id`](Self::id) call validates its identifier immediately, so the
/// first failure short-circuits the rest of the chain.
///
/// # Example
///
/// ```rust
/// use dnsimple::rest::PathBuilder;
///
/// let path = PathBuilder::account("1010")
///     .and_then(|p| p.literal("domains").id("domainIdentifier", "example.com"))
///     .unwrap()
///     .build();
/// assert_eq!(path.to_string(), "/1010/domains/example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<String>,
}

impl PathBuilder {
    /// Starts a path with the account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyParameter`] naming `accountID` if the
    /// identifier is empty.
    pub fn account<'a>(account: impl Into<Identifier<'a>>) -> Result<Self, ValidationError> {
        Self::default().id("accountID", account)
    }

    /// Appends a fixed segment.
    #[must_use]
    pub fn literal(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Appends a validated identifier segment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyParameter`] naming `parameter` if the
    /// identifier is empty or zero.
    pub fn id<'a>(
        mut self,
        parameter: &'static str,
        value: impl Into<Identifier<'a>>,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyParameter { parameter });
        }
        self.segments.push(value.segment());
        Ok(self)
    }

    /// Finishes the path.
    #[must_use]
    pub fn build(self) -> ResourcePath {
        ResourcePath {
            segments: self.segments,
        }
    }
}

/// A declarative binding of one API operation.
///
/// `T` is the payload type of the success envelope's `data` field. Action
/// endpoints, built with [`Endpoint::action`], have no payload and never
/// decode a success body.
pub struct Endpoint<T> {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path template, e.g. `{accountID}/domains/{domainIdentifier}`.
    pub template: &'static str,
    expects_data: bool,
    payload: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    /// Creates an endpoint whose success body is decoded into `T`.
    #[must_use]
    pub const fn new(method: HttpMethod, template: &'static str) -> Self {
        Self {
            method,
            template,
            expects_data: true,
            payload: PhantomData,
        }
    }

    /// Returns `false` for action endpoints.
    #[must_use]
    pub const fn expects_data(&self) -> bool {
        self.expects_data
    }

    /// Fills the template with `ids`, in order.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyParameter`] for the first empty identifier
    /// - [`ValidationError::MissingParameter`] if `ids` runs out before the placeholders do
    /// - [`ValidationError::ExtraIdentifiers`] if identifiers are left over
    pub fn path(&self, ids: &[Identifier<'_>]) -> Result<ResourcePath, ValidationError> {
        let mut builder = PathBuilder::default();
        let mut ids = ids.iter();

        for segment in self.template.split('/').filter(|s| !s.is_empty()) {
            match placeholder(segment) {
                Some(parameter) => {
                    let id = ids
                        .next()
                        .ok_or(ValidationError::MissingParameter { parameter })?;
                    builder = builder.id(parameter, *id)?;
                }
                None => builder = builder.literal(segment),
            }
        }

        let count = ids.count();
        if count > 0 {
            return Err(ValidationError::ExtraIdentifiers { count });
        }

        Ok(builder.build())
    }
}

impl Endpoint<()> {
    /// Creates an action endpoint (delete, apply, enable, disable).
    #[must_use]
    pub const fn action(method: HttpMethod, template: &'static str) -> Self {
        Self {
            method,
            template,
            expects_data: false,
            payload: PhantomData,
        }
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("expects_data", &self.expects_data)
            .finish()
    }
}

/// Returns the placeholder name of a `{name}` template segment.
fn placeholder(segment: &'static str) -> Option<&'static str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
