//! Registrar auto-renewal operations.

use crate::clients::{Client, HttpMethod};
use crate::rest::{Call, Endpoint, Error, Identifier, Response};

pub(crate) const ENABLE_AUTO_RENEWAL: Endpoint<()> = Endpoint::action(
    HttpMethod::Put,
    "{accountID}/registrar/domains/{domainName}/auto_renewal",
);
pub(crate) const DISABLE_AUTO_RENEWAL: Endpoint<()> = Endpoint::action(
    HttpMethod::Delete,
    "{accountID}/registrar/domains/{domainName}/auto_renewal",
);

/// Registrar operations, obtained from [`Client::registrar`].
#[derive(Debug, Clone, Copy)]
pub struct RegistrarService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the registrar operations.
    #[must_use]
    pub const fn registrar(&self) -> RegistrarService<'_> {
        RegistrarService { client: self }
    }
}

impl RegistrarService<'_> {
    /// Turns on auto-renewal for a registered domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the request.
    pub async fn enable_auto_renewal<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(&ENABLE_AUTO_RENEWAL, &[account.into(), domain.into()])?;
        self.client.execute(call).await
    }

    /// Turns off auto-renewal for a registered domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if validation or transport fails, or the server
    /// rejects the request.
    pub async fn disable_auto_renewal<'i>(
        &self,
        account: impl Into<Identifier<'i>>,
        domain: impl Into<Identifier<'i>>,
    ) -> Result<Response<()>, Error> {
        let call = Call::new(&DISABLE_AUTO_RENEWAL, &[account.into(), domain.into()])?;
        self.client.execute(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_renewal_endpoints_share_path() {
        let ids: [Identifier<'_>; 2] = ["1010".into(), "example.com".into()];
        let enable = ENABLE_AUTO_RENEWAL.path(&ids).unwrap();
        let disable = DISABLE_AUTO_RENEWAL.path(&ids).unwrap();

        assert_eq!(
            enable.to_string(),
            "/1010/registrar/domains/example.com/auto_renewal"
        );
        assert_eq!(enable, disable);
        assert_eq!(ENABLE_AUTO_RENEWAL.method, HttpMethod::Put);
        assert_eq!(DISABLE_AUTO_RENEWAL.method, HttpMethod::Delete);
    }
}
