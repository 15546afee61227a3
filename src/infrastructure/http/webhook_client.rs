//! Webhook delivery over reqwest.

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use url::Url;

use super::HttpSettings;
use crate::domain::clients::{NotifyError, WebhookClient};
use crate::domain::entities::NotificationPayload;

/// Posts notifications as `application/json` to a fixed endpoint.
///
/// Redirects are never followed: the endpoint itself must answer.
#[derive(Clone)]
pub struct ReqwestWebhookClient {
    client: Client,
    endpoint: Url,
}

impl ReqwestWebhookClient {
    /// Builds a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(endpoint: Url, settings: HttpSettings) -> reqwest::Result<Self> {
        Ok(Self {
            client: settings.build_client(Policy::none())?,
            endpoint,
        })
    }
}

#[async_trait]
impl WebhookClient for ReqwestWebhookClient {
    async fn post(&self, payload: &NotificationPayload) -> Result<u16, NotifyError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        Ok(response.status().as_u16())
    }
}
