//! # Webmention Receiver
//!
//! Accepts Webmentions, verifies them and relays a short notification to a
//! webhook. Built with Axum and reqwest.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Per-request entities and outbound client traits
//! - **Application Layer** ([`application`]) - The accept pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients and the rate limit table
//! - **API Layer** ([`api`]) - Handlers, form decoding and middleware
//!
//! ## Pipeline
//!
//! `POST /accept` runs, stopping at the first failure:
//!
//! 1. Per-IP rate limit (429)
//! 2. Content type check (415)
//! 3. Form decoding and URL parsing (400)
//! 4. Target host authorization (400)
//! 5. Target reachability (400)
//! 6. Source reachability (400)
//! 7. Webhook notification (500 on failure, 202 on success)
//!
//! ## Quick Start
//!
//! ```bash
//! export WEBHOOK_URL="https://hooks.example.com/api/webhooks/1/token"
//! export TARGET_HOST="ezrizhu.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AcceptService, Notifier, SiteValidator, TargetAuthorizer,
    };
    pub use crate::domain::clients::{NotifyError, SiteError, SiteProbe, WebhookClient};
    pub use crate::domain::entities::{AcceptRequest, NotificationPayload, SubmittedUrl};
    pub use crate::error::AppError;
    pub use crate::infrastructure::rate_limit::RateLimiter;
    pub use crate::state::AppState;
}
