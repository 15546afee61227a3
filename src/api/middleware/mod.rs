//! HTTP middleware for admission control and observability.

pub mod rate_limit;
pub mod tracing;
