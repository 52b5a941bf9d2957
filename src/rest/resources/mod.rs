//! Resource bindings for the DNSimple API.
//!
//! Each module declares its models, the `Endpoint` constants that bind an
//! operation to a verb and path template, and a service handle reached from
//! [`Client`](crate::Client). All hard logic lives in the shared pipeline in
//! [`crate::rest`]; a binding only picks the endpoint and the identifiers.
//!
//! # Available Resources
//!
//! | Handle | Operations |
//! |---|---|
//! | `client.domains()` | `list`, `create`, `get`, `delete` |
//! | `client.zones()` | `list`, `get` |
//! | `client.templates()` | `list`, `create`, `get`, `update`, `delete`, `apply` |
//! | `client.templates()` | `list_records`, `create_record`, `get_record`, `delete_record` |
//! | `client.registrar()` | `enable_auto_renewal`, `disable_auto_renewal` |
//! | `client.services()` | `applied`, `apply`, `unapply` |
//!
//! Identifiers accept `&str`, `&String` or `i64`:
//!
//! ```rust,ignore
//! client.domains().get("1010", "example.com").await?;
//! client.domains().get(1010_i64, 181_984_i64).await?;
//! ```

mod domain_services;
mod domains;
mod registrar;
mod template_domains;
mod template_records;
mod templates;
mod zones;

pub use domain_services::{DomainServiceSettings, Service, ServiceSetting, ServicesService};
pub use domains::{Domain, DomainListOptions, DomainsService};
pub use registrar::RegistrarService;
pub use template_records::TemplateRecord;
pub use templates::{Template, TemplatesService};
pub use zones::{Zone, ZoneListOptions, ZonesService};
