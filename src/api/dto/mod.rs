//! Data Transfer Objects for inbound requests.

pub mod accept;
