//! Domain resource implementation.
//!
//! This module provides the [`Domain`] resource and the [`DomainsService`]
//! for listing, creating, fetching and deleting the domains of an account.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::resources::{Domain, DomainListOptions};
//!
//! // List domains whose name contains "example"
//! let options = DomainListOptions::new().name_like("example").page(2);
//! let domains = client.domains().list("1010", Some(&options)).await?;
//! for domain in domains.data().into_iter().flatten() {
//!     println!("{} ({:?})", domain.name.as_deref().unwrap_or(""), domain.state);
//! }
//!
//! // Create a domain
//! let created = client.domains().create("1010", &Domain::named("example.com")).await?;
//!
//! // Delete it again
//! client.domains().delete("1010", "example.com").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpMethod};
use crate::rest::{Call, Endpoint, Error, Identifier, ListOptions, Response};

/// A domain in a DNSimple account.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `account_id`, `unicode_name`, `token`, `state`
/// - `auto_renew`, `private_whois`, `expires_at`
/// - `created_at`, `updated_at`
///
/// ## Writable Fields
/// - `name` - The domain name
/// - `registrant_id` - The contact that owns the registration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Domain {
    /// The unique identifier of the domain.
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    /// The account the domain belongs to.
    #[serde(skip_serializing)]
    pub account_id: Option<i64>,

    /// The registrant contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<i64>,

    /// The ASCII domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The Unicode form of the name.
    #[serde(skip_serializing)]
    pub unicode_name: Option<String>,

    /// The domain token.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// Registration state, e.g. `hosted` or `registered`.
    #[serde(skip_serializing)]
    pub state: Option<String>,

    /// Whether the registration renews automatically.
    #[serde(skip_serializing)]
    pub auto_renew: Option<bool>,

    /// Whether WHOIS privacy is enabled.
    #[serde(skip_serializing)]
    pub private_whois: Option<bool>,

    /// When the registration expires.
    #[serde(skip_serializing)]
    pub expires_at: Option<DateTime<Utc>>,

    /// When the domain was added.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the domain was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domain {
    /// Creates a domain payload with only the name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Options for listing domains.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DomainListOptions {
    /// Only include domains whose name contains this string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,

    /// Only include domains owned by this contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<i64>,

    /// Pagination and sorting.
    #[serde(flatten)]
    pub list: ListOptions,
}

impl DomainListOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by name substring.
    #[must_use]
    pub fn name_like(mut self, name_like: impl Into<String>) -> Self {
        self.name_like = Some(name_like.into());
        self
    }

    /// Filters by registrant.
    #[must_use]
    pub const fn registrant_id(mut self, registrant_id: i64) -> Self {
        self.registrant_id = Some(registrant_id);
        self
    }

    /// Sets the page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.list.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.list.per_page = Some(per_page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.list.sort = Some(sort.into());
        self
    }
}

pub(crate) const LIST_DOMAINS: Endpoint<Vec<Domain>> =
    Endpoint::new(HttpMethod::Get, "{accountID}/domains");
pub(crate) const CREATE_DOMAIN: Endpoint<Domain> =
    Endpoint::new(HttpMethod::Post, "{accountID}/domains");
pub(crate) const GET_DOMAIN: Endpoint<Domain> =
    Endpoint::new(HttpMethod::Get, "{accountID}/domains/{domainIdentifier}");
pub(crate) const DELETE_DOMAIN: Endpoint<()> =
    Endpoint::action(HttpMethod::Delete, "{accountID}/domains/{domainIdentifier}");

/// Domain operations, obtained from [`Client::domains`].
#[derive(Debug, Clone, Copy)]
pub struct DomainsService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the domain operations.
    #[must_use]
    pub const fn domains(&self) -> DomainsService<'_> {
        DomainsService { client: self }
    }
}

impl DomainsService<'_> {
    /// Lists the domains in an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn list<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        options: Option<&DomainListOptions>,
    ) -> Result<Response<Vec<Domain>>, Error> {
        let call = Call::new(&LIST_DOMAINS, &[account.into()])?.query(options)?;
        self.client.execute(call).await
    }

    /// Creates a domain in an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn create<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: &Domain,
    ) -> Result<Response<Domain>, Error> {
        let call = Call::new(&CREATE_DOMAIN, &[account.into()])?.body(domain)?;
        self.client.execute(call).await
    }

    /// Fetches a domain by name or id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the domain does not exist.
    pub async fn get<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
    ) -> Result<Response<Domain>, Error> {
        let call = Call::new(&GET_DOMAIN, &[account.into(), domain.into()])?;
        self.client.execute(call).await
    }

    /// Deletes a domain. The response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the deletion.
    pub async fn delete<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(&DELETE_DOMAIN, &[account.into(), domain.into()])?;
        self.client.execute(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::encode_options;
    use serde_json::json;

    #[test]
    fn test_domain_serialization_skips_read_only_fields() {
        let domain = Domain {
            id: Some(1),
            account_id: Some(1010),
            name: Some("example.com".to_string()),
            state: Some("hosted".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&domain).unwrap();
        assert_eq!(json, json!({"name": "example.com"}));
    }

    #[test]
    fn test_domain_deserialization() {
        let json = r#"{
            "id": 181984,
            "account_id": 1385,
            "registrant_id": 2715,
            "name": "example-alpha.com",
            "unicode_name": "example-alpha.com",
            "state": "registered",
            "auto_renew": false,
            "private_whois": false,
            "expires_at": "2021-06-05T02:15:00Z",
            "created_at": "2014-12-06T15:56:55Z",
            "updated_at": "2015-12-09T00:20:56Z"
        }"#;

        let domain: Domain = serde_json::from_str(json).unwrap();

        assert_eq!(domain.id, Some(181_984));
        assert_eq!(domain.registrant_id, Some(2715));
        assert_eq!(domain.state.as_deref(), Some("registered"));
        assert_eq!(domain.auto_renew, Some(false));
        assert!(domain.expires_at.is_some());
        assert!(domain.token.is_none());
    }

    #[test]
    fn test_domain_paths() {
        assert_eq!(
            LIST_DOMAINS.path(&["1010".into()]).unwrap().to_string(),
            "/1010/domains"
        );
        assert_eq!(
            GET_DOMAIN
                .path(&["1010".into(), "example.com".into()])
                .unwrap()
                .to_string(),
            "/1010/domains/example.com"
        );
        assert_eq!(DELETE_DOMAIN.method, HttpMethod::Delete);
        assert!(!DELETE_DOMAIN.expects_data());
        assert_eq!(CREATE_DOMAIN.method, HttpMethod::Post);
    }

    #[test]
    fn test_domain_list_options_encoding() {
        let options = DomainListOptions::new()
            .name_like("example")
            .registrant_id(99)
            .page(2)
            .per_page(50)
            .sort("expiration:asc");

        let path = encode_options("/v2/1010/domains", Some(&options)).unwrap();
        assert_eq!(
            path,
            "/v2/1010/domains?name_like=example&page=2&per_page=50&registrant_id=99&sort=expiration%3Aasc"
        );
    }
}
