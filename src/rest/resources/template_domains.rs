//! Applying a template to a domain.

use crate::clients::HttpMethod;
use crate::rest::resources::templates::TemplatesService;
use crate::rest::{Call, Endpoint, Error, Identifier, Response};

pub(crate) const APPLY_TEMPLATE: Endpoint<()> = Endpoint::action(
    HttpMethod::Post,
    "{accountID}/domains/{domainIdentifier}/templates/{templateIdentifier}",
);

impl TemplatesService<'_> {
    /// Applies a template's records to a domain.
    ///
    /// Sends a `POST` without a body; the response carries no data.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the request.
    pub async fn apply<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
        template: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(
            &APPLY_TEMPLATE,
            &[account.into(), domain.into(), template.into()],
        )?;
        self.client.execute(call).await
    }
}
