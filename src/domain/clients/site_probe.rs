//! Outbound reachability probe.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Why a source or target failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("invalid scheme '{0}', expected http or https")]
    InvalidScheme(String),

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status code {0}, expected 200")]
    UnexpectedStatus(u16),
}

/// Fetches a URL and reports the status of the final response.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestSiteProbe`] - live GET over reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteProbe: Send + Sync {
    /// Issues a GET against `url`.
    ///
    /// Implementations must bound the call with a timeout and a redirect limit.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Timeout`], [`SiteError::TooManyRedirects`] or
    /// [`SiteError::Transport`] when no final response was obtained.
    async fn fetch_status(&self, url: &Url) -> Result<u16, SiteError>;
}
