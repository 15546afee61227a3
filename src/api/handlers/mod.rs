//! HTTP request handlers for API endpoints.

pub mod accept;
pub mod health;

pub use accept::accept_handler;
pub use health::health_handler;
