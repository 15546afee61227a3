//! Reachability verification of sources and targets.

use std::sync::Arc;

use crate::domain::clients::{SiteError, SiteProbe};
use crate::domain::entities::{SubmittedUrl, ValidatedUrl};

/// Confirms a URL is a live `http`/`https` resource.
///
/// Every call performs a fresh fetch. Results are never cached: a mention is
/// only as good as the reachability observed when it was accepted.
pub struct SiteValidator {
    probe: Arc<dyn SiteProbe>,
}

impl SiteValidator {
    pub fn new(probe: Arc<dyn SiteProbe>) -> Self {
        Self { probe }
    }

    /// Validates the scheme, then fetches the URL and requires exactly `200 OK`.
    ///
    /// # Errors
    ///
    /// - [`SiteError::InvalidScheme`] for anything other than `http`/`https`;
    ///   no request is made in that case
    /// - [`SiteError::UnexpectedStatus`] for any final status other than 200
    /// - transport failures reported by the probe
    pub async fn validate(&self, url: SubmittedUrl) -> Result<ValidatedUrl, SiteError> {
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(SiteError::InvalidScheme(other.to_string())),
        }

        let status = self.probe.fetch_status(url.url()).await?;
        if status != 200 {
            return Err(SiteError::UnexpectedStatus(status));
        }

        Ok(ValidatedUrl::new(url))
    }
}
