//! Template record operations.
//!
//! Records live under a template:
//! `/{account}/templates/{template}/records[/{recordID}]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::templates::TemplatesService;
use crate::rest::{Call, Endpoint, Error, Identifier, ListOptions, Response};

/// A DNS record inside a template.
///
/// `name` is always sent; an empty name is the zone apex.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TemplateRecord {
    /// The unique identifier of the record.
    #[serde(skip_serializing)]
    pub id: Option<i64>,

    /// The template the record belongs to.
    #[serde(skip_serializing)]
    pub template_id: Option<i64>,

    /// The record name, relative to the zone. Empty for the apex.
    #[serde(default)]
    pub name: String,

    /// The record content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Time to live, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// The record type, e.g. `A`, `MX`, `TXT`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Priority, for record types that use one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// When the record was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the record was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

pub(crate) const LIST_TEMPLATE_RECORDS: Endpoint<Vec<TemplateRecord>> = Endpoint::new(
    HttpMethod::Get,
    "{accountID}/templates/{templateIdentifier}/records",
);
pub(crate) const CREATE_TEMPLATE_RECORD: Endpoint<TemplateRecord> = Endpoint::new(
    HttpMethod::Post,
    "{accountID}/templates/{templateIdentifier}/records",
);
pub(crate) const GET_TEMPLATE_RECORD: Endpoint<TemplateRecord> = Endpoint::new(
    HttpMethod::Get,
    "{accountID}/templates/{templateIdentifier}/records/{templateRecordID}",
);
pub(crate) const DELETE_TEMPLATE_RECORD: Endpoint<()> = Endpoint::action(
    HttpMethod::Delete,
    "{accountID}/templates/{templateIdentifier}/records/{templateRecordID}",
);

impl TemplatesService<'_> {
    /// Lists the records of a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation, transport or decoding fails.
    pub async fn list_records<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<TemplateRecord>>, Error> {
        let call = Call::new(&LIST_TEMPLATE_RECORDS, &[account.into(), template.into()])?
            .query(options)?;
        self.client.execute(call).await
    }

    /// Adds a record to a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the server rejects the record.
    pub async fn create_record<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
        record: &TemplateRecord,
    ) -> Result<Response<TemplateRecord>, Error> {
        let call = Call::new(&CREATE_TEMPLATE_RECORD, &[account.into(), template.into()])?
            .body(record)?;
        self.client.execute(call).await
    }

    /// Fetches one record of a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the record does not exist, or
    /// [`Error::Validation`] if `record_id` is zero.
    pub async fn get_record<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
        record_id: i64,
    ) -> Result<Response<TemplateRecord>, Error> {
        let call = Call::new(
            &GET_TEMPLATE_RECORD,
            &[account.into(), template.into(), Identifier::Id(record_id)],
        )?;
        self.client.execute(call).await
    }

    /// Removes a record from a template. The response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the deletion.
    pub async fn delete_record<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
        record_id: i64,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(
            &DELETE_TEMPLATE_RECORD,
            &[account.into(), template.into(), Identifier::Id(record_id)],
        )?;
        self.client.execute(call).await
    }
}
