//! Client trait definitions for outbound HTTP.
//!
//! The pipeline talks to the network only through these traits, so the
//! services can be exercised without a network.
//!
//! # Available Clients
//!
//! - [`SiteProbe`] - Fetches a source or target URL
//! - [`WebhookClient`] - Delivers the notification
//!
//! Implementations live in `crate::infrastructure::http`; mock
//! implementations are auto-generated via `mockall` for testing.

pub mod site_probe;
pub mod webhook_client;

pub use site_probe::{SiteError, SiteProbe};
pub use webhook_client::{NotifyError, WebhookClient};

#[cfg(test)]
pub use site_probe::MockSiteProbe;
#[cfg(test)]
pub use webhook_client::MockWebhookClient;
