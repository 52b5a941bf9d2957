//! Zone resource implementation.
//!
//! Zones are read through the API; they are created and removed together
//! with their domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpMethod};
use crate::rest::{Call, Endpoint, Error, Identifier, ListOptions, Response};

/// A DNS zone hosted by DNSimple.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Zone {
    /// The unique identifier of the zone.
    pub id: Option<i64>,
    /// The account the zone belongs to.
    pub account_id: Option<i64>,
    /// The zone name.
    pub name: Option<String>,
    /// Whether this is a reverse DNS zone.
    #[serde(default)]
    pub reverse: bool,
    /// When the zone was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the zone was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Options for listing zones.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ZoneListOptions {
    /// Only include zones whose name contains this string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,

    /// Pagination and sorting.
    #[serde(flatten)]
    pub list: ListOptions,
}

pub(crate) const LIST_ZONES: Endpoint<Vec<Zone>> =
    Endpoint::new(HttpMethod::Get, "{accountID}/zones");
pub(crate) const GET_ZONE: Endpoint<Zone> =
    Endpoint::new(HttpMethod::Get, "{accountID}/zones/{zoneName}");

/// Zone operations, obtained from [`Client::zones`].
#[derive(Debug, Clone, Copy)]
pub struct ZonesService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the zone operations.
    #[must_use]
    pub const fn zones(&self) -> ZonesService<'_> {
        ZonesService { client: self }
    }
}

impl ZonesService<'_> {
    /// Lists the zones in an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn list<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        options: Option<&ZoneListOptions>,
    ) -> Result<Response<Vec<Zone>>, Error> {
        let call = Call::new(&LIST_ZONES, &[account.into()])?.query(options)?;
        self.client.execute(call).await
    }

    /// Fetches a zone by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the zone does not exist.
    pub async fn get<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        zone: impl Into<Identifier<'i>>,
    ) -> Result<Response<Zone>, Error> {
        let call = Call::new(&GET_ZONE, &[account.into(), zone.into()])?;
        self.client.execute(call).await
    }
}
