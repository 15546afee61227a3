//! HTTP-visible error type for the accept pipeline.
//!
//! Every variant maps to a single status code. Responses never carry a body:
//! the offending URL and the underlying cause are logged where the error is
//! raised and are not echoed to the caller.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::clients::{NotifyError, SiteError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("unsupported content type {0:?}")]
    UnsupportedMediaType(Option<String>),

    #[error("malformed form body: {0}")]
    MalformedForm(String),

    #[error("invalid {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("target host {host:?} is not served here")]
    UnauthorizedTarget { host: String },

    #[error("{field} {url} failed verification: {source}")]
    Unreachable {
        field: &'static str,
        url: String,
        #[source]
        source: SiteError,
    },

    #[error("webhook delivery failed: {0}")]
    Delivery(#[from] NotifyError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_url(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field,
            reason: reason.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MalformedForm(_)
            | AppError::InvalidUrl { .. }
            | AppError::UnauthorizedTarget { .. }
            | AppError::Unreachable { .. } => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::RateLimited { retry_after_secs } => (
                status,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
            )
                .into_response(),
            _ => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::RateLimited { retry_after_secs: 1 }.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::UnsupportedMediaType(Some("application/json".into())).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::MalformedForm("bad escape".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_url("target", "relative URL without a base").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnauthorizedTarget {
                host: "evil.com".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unreachable {
                field: "source",
                url: "https://example.org".into(),
                source: SiteError::UnexpectedStatus(500),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Delivery(NotifyError::UnexpectedStatus(200)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_response_has_no_body() {
        let response = AppError::Delivery(NotifyError::Transport(
            "connection refused to https://hooks.example.com/secret".into(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = AppError::RateLimited {
            retry_after_secs: 42,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }
}
