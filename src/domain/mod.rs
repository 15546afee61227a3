//! Domain layer containing the Webmention data model and outbound seams.
//!
//! # Architecture
//!
//! - [`entities`] - Per-request data structures
//! - [`clients`] - Outbound HTTP trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Client traits define contracts implemented by the infrastructure layer
//! - Pipeline logic lives in services (see [`crate::application::services`])

pub mod clients;
pub mod entities;
