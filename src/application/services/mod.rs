//! Services that make up the Webmention accept pipeline.

pub mod accept_service;
pub mod notifier;
pub mod site_validator;
pub mod target_authorizer;

pub use accept_service::AcceptService;
pub use notifier::Notifier;
pub use site_validator::SiteValidator;
pub use target_authorizer::TargetAuthorizer;
