//! Shared reqwest client construction.

use reqwest::{Client, redirect::Policy};
use std::time::Duration;

use crate::config::Config;

/// User agent sent with every outbound request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Bounds applied to every outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    /// Total time allowed for one call, connect included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Redirect hops followed by the site probe. The webhook client ignores it.
    pub max_redirects: usize,
}

impl HttpSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.http_timeout(),
            connect_timeout: config.http_connect_timeout(),
            max_redirects: config.max_redirects,
        }
    }

    pub(super) fn build_client(&self, redirect: Policy) -> reqwest::Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(USER_AGENT)
            .redirect(redirect)
            .build()
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            max_redirects: 5,
        }
    }
}
