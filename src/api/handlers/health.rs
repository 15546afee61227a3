//! Handler for health check endpoint.

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK` with body `OK`. Outbound dependencies are not
/// probed: the webhook is only contacted for accepted mentions.
pub async fn health_handler() -> &'static str {
    "OK"
}
