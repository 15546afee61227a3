//! Handler for the Webmention endpoint.

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{StatusCode, header},
};

use crate::api::dto::accept::{AcceptForm, FORM_CONTENT_TYPE};
use crate::error::AppError;
use crate::state::AppState;

/// Upper bound on the form body. Two URLs fit comfortably.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Accepts a Webmention.
///
/// # Endpoint
///
/// `POST /accept`
///
/// # Request Body
///
/// ```text
/// Content-Type: application/x-www-form-urlencoded
///
/// source=https://example.org/post&target=https://ezrizhu.com/blog/1
/// ```
///
/// # Response Codes
///
/// - **202 Accepted**: Both URLs verified and the webhook acknowledged
/// - **400 Bad Request**: Malformed form, bad URL, foreign target host or
///   unreachable source/target
/// - **415 Unsupported Media Type**: Any other `Content-Type`
/// - **500 Internal Server Error**: Webhook delivery failed
///
/// Responses have no body.
pub async fn accept_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<StatusCode, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    if content_type.as_deref() != Some(FORM_CONTENT_TYPE) {
        tracing::info!(content_type = ?content_type, "invalid content type");
        return Err(AppError::UnsupportedMediaType(content_type));
    }

    let form = to_bytes(request.into_body(), MAX_FORM_BYTES)
        .await
        .map_err(|e| AppError::MalformedForm(e.to_string()))
        .and_then(|body| AcceptForm::from_bytes(&body))
        .inspect_err(|e| tracing::info!(error = %e, "error parsing form"))?;

    let mention = form
        .into_request()
        .inspect_err(|e| tracing::info!(error = %e, "invalid request"))?;

    state.accept_service.accept(mention).await?;

    Ok(StatusCode::ACCEPTED)
}
