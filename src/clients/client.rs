//! The API client and request dispatcher.
//!
//! [`Client`] owns the immutable configuration and the injected
//! [`Transport`]. Every resource operation funnels through
//! [`Client::execute`]: the bound [`Call`] is versioned, dispatched once,
//! and the response is decoded or classified.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::cancel::CancelToken;
use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::DnsimpleConfig;
use crate::error::ConfigError;
use crate::rest::{decode_response, Call, Error, Response, ValidationError};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the DNSimple API.
///
/// The client handles:
/// - Versioning every path (`/v2/...`) and joining it onto the base URL
/// - Default headers including User-Agent and the bearer token
/// - Per-request timeout and caller-driven cancellation
/// - Routing each response to the envelope decoder or the error classifier
///
/// No retries are attempted; a failed call is returned to the caller as is.
///
/// # Thread Safety
///
/// `Client` is cheap to clone and is `Send + Sync`. Clones share the
/// transport and configuration, neither of which is mutated after
/// construction.
///
/// # Example
///
/// ```rust,no_run
/// use dnsimple::{AccessToken, Client, DnsimpleConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .sandbox()
///     .build()?;
/// let client = Client::new(config)?;
///
/// let response = client.domains().list("1010", None).await?;
/// for domain in response.data().into_iter().flatten() {
///     println!("{}", domain.name.as_deref().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: Arc<DnsimpleConfig>,
    default_headers: Arc<HashMap<String, String>>,
    cancel_token: Option<CancelToken>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP backend cannot be
    /// initialized.
    pub fn new(config: DnsimpleConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: DnsimpleConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}dnsimple-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );

        Self {
            transport,
            config: Arc::new(config),
            default_headers: Arc::new(default_headers),
            cancel_token: None,
        }
    }

    /// Returns a handle whose calls abort when `token` is cancelled.
    ///
    /// The original client is unaffected.
    #[must_use]
    pub fn with_cancel_token(&self, token: CancelToken) -> Self {
        Self {
            cancel_token: Some(token),
            ..self.clone()
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &DnsimpleConfig {
        &self.config
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a bound call and decodes its response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] of the kind matching the failure: transport,
    /// status classification, or a malformed success body.
    pub async fn execute<T: DeserializeOwned>(&self, call: Call<T>) -> Result<Response<T>, Error> {
        let expects_data = call.expects_data();
        let (method, path, body) = call.into_parts();
        let response = self.dispatch(method, &path, body).await?;
        decode_response(response, expects_data)
    }

    /// Sends one request and returns the raw response, whatever its status.
    ///
    /// `path` is relative to the version root: the version prefix is always
    /// prepended before the path is joined onto the base URL.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the request cannot be assembled
    /// - [`Error::Transport`] for network failures, timeout and cancellation
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, Error> {
        if self.cancel_token.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(TransportError::Cancelled.into());
        }

        let path = self.config.api_version().prefixed(path);
        let url = self.config.base_url().join(&path);

        let request = HttpRequest::builder(method, url)
            .headers(self.default_headers.iter())
            .maybe_body(body)
            .build()
            .map_err(ValidationError::from)?;

        tracing::debug!(%method, %path, "Dispatching request");

        let timeout = self.config.timeout();
        let send = async {
            let pending = self.transport.execute(request);
            match timeout {
                Some(limit) => tokio::time::timeout(limit, pending)
                    .await
                    .unwrap_or(Err(TransportError::Timeout)),
                None => pending.await,
            }
        };

        let result = match &self.cancel_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(TransportError::Cancelled),
                    result = send => result,
                }
            }
            None => send.await,
        };

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(%method, %path, error = %e, "Request failed before a response");
                return Err(e.into());
            }
        };

        tracing::debug!(%method, %path, status = response.code, "Received response");

        if let Some(limit) = response.rate_limit {
            if limit.remaining == 0 {
                tracing::warn!(
                    "DNSimple rate limit of {} requests exhausted; resets at {}",
                    limit.limit,
                    limit.reset
                );
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Recording {
        requests: Mutex<Vec<HttpRequest>>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl Transport for Recording {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(HttpResponse::new(204, HashMap::new(), ""))
        }
    }

    fn config() -> DnsimpleConfig {
        DnsimpleConfig::builder()
            .access_token(AccessToken::new("secret").unwrap())
            .base_url(BaseUrl::new("https://api.example.test").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_headers() {
        let client = Client::with_transport(config(), Arc::new(Recording::default()));
        let headers = client.default_headers();

        assert_eq!(
            headers.get("User-Agent"),
            Some(&format!("MyApp/1.0 | dnsimple-rust/{SDK_VERSION}"))
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(headers.get("Authorization"), Some(&"Bearer secret".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_versions_and_joins_path() {
        let transport = Arc::new(Recording::default());
        let client = Client::with_transport(config(), transport.clone());

        let response = client
            .dispatch(HttpMethod::Delete, "/1010/domains/example.com", None)
            .await
            .unwrap();
        assert_eq!(response.code, 204);

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://api.example.test/v2/1010/domains/example.com"
        );
        assert_eq!(requests[0].http_method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_fired_token_prevents_dispatch() {
        let transport = Arc::new(Recording::default());
        let token = CancelToken::new();
        token.cancel();
        let client =
            Client::with_transport(config(), transport.clone()).with_cancel_token(token);

        let error = client
            .dispatch(HttpMethod::Get, "/whoami", None)
            .await
            .unwrap_err();

        assert!(error.is_cancelled());
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_transport_error() {
        let transport = Arc::new(Recording {
            delay: Some(Duration::from_secs(5)),
            ..Recording::default()
        });
        let config = DnsimpleConfig::builder()
            .access_token(AccessToken::new("secret").unwrap())
            .timeout(Duration::from_millis(20))
            .build()
            .unwrap();
        let client = Client::with_transport(config, transport);

        let error = client
            .dispatch(HttpMethod::Get, "/whoami", None)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Transport(TransportError::Timeout)));
    }
}
