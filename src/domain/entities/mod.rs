//! Core domain entities for a single Webmention.
//!
//! # Entity Types
//!
//! - [`SubmittedUrl`] - A parsed URL that remembers how it was written
//! - [`AcceptRequest`] - The `source`/`target` pair of one claim
//! - [`ValidatedUrl`] - A URL that was reachable when it was checked
//! - [`NotificationPayload`] - The message relayed to the webhook
//!
//! None of them outlive the request that created them.

pub mod accept_request;
pub mod notification;
pub mod submitted_url;

pub use accept_request::{AcceptRequest, ValidatedUrl};
pub use notification::NotificationPayload;
pub use submitted_url::SubmittedUrl;
