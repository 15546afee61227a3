//! HTTP API layer for request/response handling.
//!
//! This layer turns HTTP requests into pipeline calls and pipeline outcomes
//! into status codes.
//!
//! # Modules
//!
//! - [`dto`] - Form decoding for inbound requests
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
