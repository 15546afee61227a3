//! Message relayed to the webhook for an accepted mention.

use serde::Serialize;

/// JSON body posted to the webhook: `{"content": "from: <source> to: <target>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub content: String,
}

impl NotificationPayload {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            content: format!("from: {source} to: {target}"),
        }
    }
}
