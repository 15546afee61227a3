//! Parsed Webmention claim and its verified URLs.

use super::SubmittedUrl;

/// A Webmention claim: `source` says it links to `target`.
///
/// Both URLs are syntactically valid but neither has been authorized or
/// fetched yet. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptRequest {
    pub source: SubmittedUrl,
    pub target: SubmittedUrl,
}

/// A URL that used `http`/`https` and answered `200 OK` when it was checked.
///
/// Only [`crate::application::services::SiteValidator`] creates these. The
/// check is a point-in-time assertion and is never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(SubmittedUrl);

impl ValidatedUrl {
    pub(crate) fn new(url: SubmittedUrl) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
