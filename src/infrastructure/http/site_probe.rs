//! Live reachability probe over reqwest.

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use url::Url;

use super::HttpSettings;
use crate::domain::clients::{SiteError, SiteProbe};

/// Issues a GET and reports the final status.
///
/// Redirects are followed up to [`HttpSettings::max_redirects`] hops (none
/// when zero, in which case the 3xx itself is reported). The response body is
/// never read.
#[derive(Clone)]
pub struct ReqwestSiteProbe {
    client: Client,
}

impl ReqwestSiteProbe {
    /// Builds the probe's client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(settings: HttpSettings) -> reqwest::Result<Self> {
        let redirect = match settings.max_redirects {
            0 => Policy::none(),
            hops => Policy::limited(hops),
        };

        Ok(Self {
            client: settings.build_client(redirect)?,
        })
    }
}

#[async_trait]
impl SiteProbe for ReqwestSiteProbe {
    async fn fetch_status(&self, url: &Url) -> Result<u16, SiteError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Ok(response.status().as_u16())
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SiteError {
    if e.is_timeout() {
        SiteError::Timeout
    } else if e.is_redirect() {
        SiteError::TooManyRedirects
    } else {
        SiteError::Transport(e.to_string())
    }
}
