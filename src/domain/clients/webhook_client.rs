//! Outbound webhook delivery.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::NotificationPayload;

/// Why a notification was not delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid status code, received {0}")]
    UnexpectedStatus(u16),
}

/// Posts a [`NotificationPayload`] as JSON to the configured webhook.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestWebhookClient`] - POST over reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Sends `payload` once and returns the webhook's response status.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Transport`] when no response was received.
    async fn post(&self, payload: &NotificationPayload) -> Result<u16, NotifyError>;
}
