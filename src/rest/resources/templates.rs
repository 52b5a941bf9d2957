//! Template resource implementation.
//!
//! Templates are reusable sets of DNS records that can be applied to any
//! domain in the account. Records inside a template are managed through
//! the same [`TemplatesService`]; see the `template_records` and
//! `template_domains` modules.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::resources::Template;
//!
//! let template = Template {
//!     sid: Some("alpha".to_string()),
//!     name: Some("Alpha".to_string()),
//!     ..Default::default()
//! };
//! let created = client.templates().create("1010", &template).await?;
//!
//! let renamed = Template {
//!     name: Some("Alpha v2".to_string()),
//!     ..Default::default()
//! };
//! client.templates().update("1010", "alpha", &renamed).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpMethod};
use crate::rest::{Call, Endpoint, Error, Identifier, ListOptions, Response};

/// A DNS record template.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `account_id`, `created_at`, `updated_at`
///
/// ## Writable Fields
/// - `sid` - Short identifier, usable in place of the id
/// - `name` - Display name
/// - `description` - Free-form description
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Template {
    /// The unique identifier of the template.
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    /// The short identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The account the template belongs to.
    #[serde(skip_serializing)]
    pub account_id: Option<i64>,

    /// The template name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The template description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the template was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the template was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

pub(crate) const LIST_TEMPLATES: Endpoint<Vec<Template>> =
    Endpoint::new(HttpMethod::Get, "{accountID}/templates");
pub(crate) const CREATE_TEMPLATE: Endpoint<Template> =
    Endpoint::new(HttpMethod::Post, "{accountID}/templates");
pub(crate) const GET_TEMPLATE: Endpoint<Template> =
    Endpoint::new(HttpMethod::Get, "{accountID}/templates/{templateIdentifier}");
pub(crate) const UPDATE_TEMPLATE: Endpoint<Template> =
    Endpoint::new(HttpMethod::Patch, "{accountID}/templates/{templateIdentifier}");
pub(crate) const DELETE_TEMPLATE: Endpoint<()> = Endpoint::action(
    HttpMethod::Delete,
    "{accountID}/templates/{templateIdentifier}",
);

/// Template operations, obtained from [`Client::templates`].
#[derive(Debug, Clone, Copy)]
pub struct TemplatesService<'a> {
    pub(crate) client: &'a Client,
}

impl Client {
    /// Returns the template operations.
    #[must_use]
    pub const fn templates(&self) -> TemplatesService<'_> {
        TemplatesService { client: self }
    }
}

impl TemplatesService<'_> {
    /// Lists the templates in an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn list<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Template>>, Error> {
        let call = Call::new(&LIST_TEMPLATES, &[account.into()])?.query(options)?;
        self.client.execute(call).await
    }

    /// Creates a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the attributes.
    pub async fn create<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: &Template,
    ) -> Result<Response<Template>, Error> {
        let call = Call::new(&CREATE_TEMPLATE, &[account.into()])?.body(template)?;
        self.client.execute(call).await
    }

    /// Fetches a template by sid or id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the template does not exist.
    pub async fn get<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
    ) -> Result<Response<Template>, Error> {
        let call = Call::new(&GET_TEMPLATE, &[account.into(), template.into()])?;
        self.client.execute(call).await
    }

    /// Updates a template. Only the fields set on `changes` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn update<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
        changes: &Template,
    ) -> Result<Response<Template>, Error> {
        let call =
            Call::new(&UPDATE_TEMPLATE, &[account.into(), template.into()])?.body(changes)?;
        self.client.execute(call).await
    }

    /// Deletes a template. The response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the deletion.
    pub async fn delete<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(&DELETE_TEMPLATE, &[account.into(), template.into()])?;
        self.client.execute(call).await
    }
}
