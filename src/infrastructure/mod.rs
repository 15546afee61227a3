//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and holds the
//! process-wide in-memory state.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed site probe and webhook client
//! - [`rate_limit`] - Per-IP fixed-window counters

pub mod http;
pub mod rate_limit;
