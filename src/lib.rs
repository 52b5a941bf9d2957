//! # DNSimple API Rust Client
//!
//! A typed client for the DNSimple v2 REST API: accounts, domains, zones,
//! templates, registrar auto-renewal and one-click services.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DnsimpleConfig`] and [`DnsimpleConfigBuilder`]
//! - Validated newtypes for the access token and base URL
//! - One method per API operation, returning a typed [`Response`] or a classified [`Error`]
//! - Path validation that fails before any network call when an identifier is empty
//! - Query encoding for filters and pagination
//! - An injectable [`clients::Transport`], per-request timeout and cancellation
//!
//! ## Quick Start
//!
//! ```rust
//! use dnsimple::{AccessToken, ApiVersion, DnsimpleConfig};
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use dnsimple::{AccessToken, Client, DnsimpleConfig, Error};
//! use dnsimple::rest::resources::DomainListOptions;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("your-access-token")?)
//!     .build()?;
//! let client = Client::new(config)?;
//!
//! let options = DomainListOptions::new().name_like("example").page(2);
//! let response = client.domains().list("1010", Some(&options)).await?;
//! if let Some(pagination) = response.pagination() {
//!     println!("page {} of {}", pagination.current_page, pagination.total_pages);
//! }
//!
//! match client.domains().get("1010", "missing.com").await {
//!     Err(Error::NotFound(e)) => println!("not found: {}", e.message),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Kinds
//!
//! | Kind | Cause |
//! |---|---|
//! | [`Error::Validation`] | empty identifier, unencodable option, or HTTP 422 |
//! | [`Error::Auth`] | HTTP 401 |
//! | [`Error::NotFound`] | HTTP 404 |
//! | [`Error::Client`] | other 4xx |
//! | [`Error::Server`] | 5xx |
//! | [`Error::Transport`] | network failure, timeout, cancellation |
//! | [`Error::Decode`] | malformed 2xx body |
//! | [`Error::UnexpectedStatus`] | any other status |
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and transport are passed explicitly
//! - **Fail-fast validation**: Newtypes and paths validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **No retries**: Every call is one round trip; retry policy belongs to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, BaseUrl, DnsimpleConfig, DnsimpleConfigBuilder};
pub use error::ConfigError;

pub use clients::{Client, HttpMethod, HttpRequest, HttpResponse, TransportError};
pub use rest::{Error, ListOptions, Pagination, Response, ValidationError};
