//! reqwest implementations of the outbound client traits.
//!
//! Both clients are built once at startup and shared by every request, so
//! connections to repeat hosts are reused.

mod client;
mod site_probe;
mod webhook_client;

pub use client::HttpSettings;
pub use site_probe::ReqwestSiteProbe;
pub use webhook_client::ReqwestWebhookClient;
