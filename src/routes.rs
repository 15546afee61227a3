//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Liveness probe
//! - `POST /accept` - Webmention receiver
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP fixed window, applied to every route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// The client IP is read from the `ConnectInfo<SocketAddr>` request
/// extension, so the router must be served with connect info.
pub fn build_router(state: AppState) -> Router {
    api::routes::public_routes()
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
