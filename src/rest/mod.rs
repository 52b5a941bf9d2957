//! The request/response pipeline and the resource bindings built on it.
//!
//! This module provides:
//!
//! - **Path building**: [`Endpoint`], [`Identifier`], [`PathBuilder`] and
//!   [`ResourcePath`], with fail-fast identifier validation
//! - **Query encoding**: [`ListOptions`], [`encode_options`] and [`query_pairs`]
//! - **Bound calls**: [`Call`], an endpoint with identifiers, options and body applied
//! - **Envelope decoding**: [`decode_response`], [`Response`] and [`Pagination`]
//! - **Error classification**: [`Error`], [`ValidationError`],
//!   [`HttpResponseError`], [`DecodeError`] and [`classify_error`]
//!
//! # Overview
//!
//! A resource operation is a declarative binding (verb, path template,
//! payload type) evaluated by this shared pipeline:
//!
//! ```text
//! Endpoint + ids ──► ResourcePath ──► + query ──► prefixed  ──► Transport
//!                                                                 │
//!                       Response<T> ◄── decode_response ◄── 2xx ──┤
//!                             Error ◄── classify_error  ◄── else ─┘
//! ```
//!
//! Individual resources (domains, zones, templates, ...) live in the
//! [`resources`] submodule.
//!
//! # Example: a custom binding
//!
//! ```rust,no_run
//! use dnsimple::rest::{Call, Endpoint};
//! use dnsimple::clients::HttpMethod;
//! use dnsimple::Client;
//!
//! const WHOAMI: Endpoint<serde_json::Value> = Endpoint::new(HttpMethod::Get, "whoami");
//!
//! # async fn run(client: &Client) -> Result<(), dnsimple::Error> {
//! let call = Call::new(&WHOAMI, &[])?;
//! let response = client.execute(call).await?;
//! println!("{:?}", response.data());
//! # Ok(())
//! # }
//! ```

mod call;
mod errors;
mod path;
mod query;
mod response;

pub mod resources;

pub use call::Call;
pub use errors::{classify_error, DecodeError, Error, HttpResponseError, ValidationError};
pub use path::{Endpoint, Identifier, PathBuilder, ResourcePath};
pub use query::{encode_options, query_pairs, ListOptions};
pub use response::{decode_response, Pagination, Response};
