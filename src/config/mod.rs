//! Configuration types for the DNSimple client.
//!
//! This module provides the configuration established once at client
//! construction and treated as immutable for the lifetime of the client.
//!
//! # Overview
//!
//! - [`DnsimpleConfig`]: The configuration struct holding all client settings
//! - [`DnsimpleConfigBuilder`]: A builder for constructing [`DnsimpleConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The API version prefix applied to every path
//!
//! # Example
//!
//! ```rust
//! use dnsimple::{AccessToken, ApiVersion, DnsimpleConfig};
//! use std::time::Duration;
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .sandbox()
//!     .api_version(ApiVersion::V2)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.sandbox.dnsimple.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Production API endpoint.
pub const PRODUCTION_BASE_URL: &str = "https://api.dnsimple.com";

/// Sandbox API endpoint.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com";

/// Configuration for the DNSimple client.
///
/// # Thread Safety
///
/// `DnsimpleConfig` is `Clone`, `Send`, and `Sync`. The client keeps it
/// behind an `Arc` and only ever reads it.
#[derive(Clone, Debug)]
pub struct DnsimpleConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl DnsimpleConfig {
    /// Creates a new builder for constructing a `DnsimpleConfig`.
    #[must_use]
    pub fn builder() -> DnsimpleConfigBuilder {
        DnsimpleConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify DnsimpleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DnsimpleConfig>();
};

/// Builder for constructing [`DnsimpleConfig`] instances.
///
/// `access_token` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`PRODUCTION_BASE_URL`]
/// - `api_version`: [`ApiVersion::V2`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side deadline)
#[derive(Debug, Default)]
pub struct DnsimpleConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl DnsimpleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Points the client at the DNSimple sandbox environment.
    #[must_use]
    pub fn sandbox(mut self) -> Self {
        self.base_url = BaseUrl::new(SANDBOX_BASE_URL).ok();
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Bounds every dispatched request by `timeout`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`DnsimpleConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<DnsimpleConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(PRODUCTION_BASE_URL)?,
        };

        Ok(DnsimpleConfig {
            access_token,
            base_url,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = DnsimpleConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DnsimpleConfig::builder()
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), PRODUCTION_BASE_URL);
        assert_eq!(config.api_version(), &ApiVersion::V2);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_sandbox() {
        let config = DnsimpleConfig::builder()
            .access_token(token())
            .sandbox()
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), SANDBOX_BASE_URL);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let url = BaseUrl::new("http://localhost:4000").unwrap();
        let config = DnsimpleConfig::builder()
            .access_token(token())
            .base_url(url.clone())
            .api_version(ApiVersion::Custom("v3".to_string()))
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &url);
        assert_eq!(config.api_version().prefix(), "/v3");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = DnsimpleConfig::builder()
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("DnsimpleConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
