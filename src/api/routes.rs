//! API route configuration.

use crate::api::handlers::{accept_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /health` - Liveness probe, always `200 OK`
/// - `POST /accept` - Webmention receiver
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/accept", post(accept_handler))
}
