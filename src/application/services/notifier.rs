//! Webhook notification for accepted mentions.

use std::sync::Arc;

use crate::domain::clients::{NotifyError, WebhookClient};
use crate::domain::entities::{NotificationPayload, ValidatedUrl};

/// Relays an accepted mention to the webhook.
///
/// Delivery is at-most-once: a failed post is reported, never retried.
pub struct Notifier {
    client: Arc<dyn WebhookClient>,
}

impl Notifier {
    pub fn new(client: Arc<dyn WebhookClient>) -> Self {
        Self { client }
    }

    /// Posts `from: <source> to: <target>` and requires `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::UnexpectedStatus`] for any other status and
    /// [`NotifyError::Transport`] when the webhook could not be reached.
    pub async fn notify(
        &self,
        source: &ValidatedUrl,
        target: &ValidatedUrl,
    ) -> Result<(), NotifyError> {
        let payload = NotificationPayload::new(source.as_str(), target.as_str());

        match self.client.post(&payload).await? {
            204 => Ok(()),
            status => Err(NotifyError::UnexpectedStatus(status)),
        }
    }
}
