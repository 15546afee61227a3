//! Application layer services implementing the accept pipeline.
//!
//! Services consume the client traits from [`crate::domain::clients`] and
//! expose a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::target_authorizer::TargetAuthorizer`] - Target host check
//! - [`services::site_validator::SiteValidator`] - Scheme and reachability check
//! - [`services::notifier::Notifier`] - Webhook delivery
//! - [`services::accept_service::AcceptService`] - Sequences the above for one request

pub mod services;
