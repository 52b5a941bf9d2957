//! One-click service operations on a domain.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::resources::DomainServiceSettings;
//!
//! let settings = DomainServiceSettings::new().setting("app", "my-heroku-app");
//! client.services().apply("1010", "example.com", "heroku", &settings).await?;
//!
//! let applied = client.services().applied("1010", "example.com", None).await?;
//! client.services().unapply("1010", "example.com", "heroku").await?;
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpMethod};
use crate::rest::{Call, Endpoint, Error, Identifier, ListOptions, Response};

/// A one-click service that can be applied to a domain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Service {
    /// The unique identifier of the service.
    pub id: Option<i64>,
    /// The short identifier, e.g. `heroku`.
    pub sid: Option<String>,
    /// The display name.
    pub name: Option<String>,
    /// What the service does.
    pub description: Option<String>,
    /// Instructions shown before applying.
    pub setup_description: Option<String>,
    /// Whether settings must be supplied when applying.
    #[serde(default)]
    pub requires_setup: bool,
    /// The subdomain the service uses by default.
    pub default_subdomain: Option<String>,
    /// The settings the service accepts.
    #[serde(default)]
    pub settings: Vec<ServiceSetting>,
    /// When the service was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the service was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A setting accepted by a [`Service`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceSetting {
    /// The setting key.
    pub name: Option<String>,
    /// The display label.
    pub label: Option<String>,
    /// Text appended to the value.
    pub append: Option<String>,
    /// What the setting controls.
    pub description: Option<String>,
    /// An example value.
    pub example: Option<String>,
    /// Whether the value is a secret.
    #[serde(default)]
    pub password: bool,
}

/// Settings supplied when applying a service.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DomainServiceSettings {
    /// Setting name to value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, String>,
}

impl DomainServiceSettings {
    /// Creates empty settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one setting.
    #[must_use]
    pub fn setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(name.into(), value.into());
        self
    }
}

pub(crate) const APPLIED_SERVICES: Endpoint<Vec<Service>> = Endpoint::new(
    HttpMethod::Get,
    "{accountID}/domains/{domainIdentifier}/services",
);
pub(crate) const APPLY_SERVICE: Endpoint<()> = Endpoint::action(
    HttpMethod::Post,
    "{accountID}/domains/{domainIdentifier}/services/{serviceIdentifier}",
);
pub(crate) const UNAPPLY_SERVICE: Endpoint<()> = Endpoint::action(
    HttpMethod::Delete,
    "{accountID}/domains/{domainIdentifier}/services/{serviceIdentifier}",
);

/// One-click service operations, obtained from [`Client::services`].
#[derive(Debug, Clone, Copy)]
pub struct ServicesService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the one-click service operations.
    #[must_use]
    pub const fn services(&self) -> ServicesService<'_> {
        ServicesService { client: self }
    }
}

impl ServicesService<'_> {
    /// Lists the services applied to a domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn applied<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Service>>, Error> {
        let call =
            Call::new(&APPLIED_SERVICES, &[account.into(), domain.into()])?.query(options)?;
        self.client.execute(call).await
    }

    /// Applies a service to a domain. The response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the settings.
    pub async fn apply<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
        service: impl Into<Identifier<'i>>,
        settings: &DomainServiceSettings,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(
            &APPLY_SERVICE,
            &[account.into(), domain.into(), service.into()],
        )?
        .body(settings)?;
        self.client.execute(call).await
    }

    /// Removes a service from a domain. The response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the request.
    pub async fn unapply<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
        service: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(
            &UNAPPLY_SERVICE,
            &[account.into(), domain.into(), service.into()],
        )?;
        self.client.execute(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_serialization() {
        let settings = DomainServiceSettings::new().setting("app", "my-app");
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"settings": {"app": "my-app"}})
        );

        assert_eq!(
            serde_json::to_value(DomainServiceSettings::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_service_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "Service 1",
            "sid": "service1",
            "description": "First service example.",
            "setup_description": null,
            "requires_setup": true,
            "default_subdomain": null,
            "created_at": "2014-02-14T19:15:19Z",
            "updated_at": "2016-03-04T09:23:27Z",
            "settings": [
                {
                    "name": "username",
                    "label": "Service 1 Account Username",
                    "append": ".service1.com",
                    "description": "Your Service 1 username is used to connect services to your account.",
                    "example": "username",
                    "password": false
                }
            ]
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.sid.as_deref(), Some("service1"));
        assert!(service.requires_setup);
        assert_eq!(service.settings.len(), 1);
        assert_eq!(service.settings[0].name.as_deref(), Some("username"));
    }

    #[test]
    fn test_service_paths() {
        let path = APPLY_SERVICE
            .path(&["1010".into(), "example.com".into(), "heroku".into()])
            .unwrap();
        assert_eq!(path.to_string(), "/1010/domains/example.com/services/heroku");
        assert_eq!(UNAPPLY_SERVICE.template, APPLY_SERVICE.template);
        assert_eq!(APPLIED_SERVICES.method, HttpMethod::Get);

        let error = UNAPPLY_SERVICE
            .path(&["1010".into(), "example.com".into(), "".into()])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parameter 'serviceIdentifier' cannot be empty"
        );
    }
}
