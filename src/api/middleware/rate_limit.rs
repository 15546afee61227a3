//! Per-IP admission control for every route.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::IpAddr;
use tower_governor::{
    GovernorError,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;
use crate::infrastructure::rate_limit::{RateLimitDecision, ceil_secs};
use crate::state::AppState;

static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Admits at most `RATE_LIMIT_REQUESTS` requests per client IP per window.
///
/// Runs before any handler work. Requests over the limit receive
/// `429 Too Many Requests` with `Retry-After`; every response carries
/// `X-RateLimit-Limit`, `X-RateLimit-Remaining` and `X-RateLimit-Reset`.
///
/// # Key Extraction
///
/// The client IP is the socket peer address, or, when the service runs
/// behind a trusted proxy, the first address found in `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/accept", post(accept_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let ip = match client_ip(&req, st.behind_proxy) {
        Ok(ip) => ip,
        Err(e) => {
            tracing::warn!(error = ?e, "unable to determine client IP");
            return AppError::Internal("client address unavailable".to_string()).into_response();
        }
    };

    let limit = st.rate_limiter.limit();

    match st.rate_limiter.check(ip) {
        RateLimitDecision::Allowed {
            remaining,
            reset_in,
        } => {
            let mut response = next.run(req).await;
            set_headers(response.headers_mut(), limit, remaining, ceil_secs(reset_in));
            response
        }
        RateLimitDecision::Limited { retry_after } => {
            let retry_after_secs = ceil_secs(retry_after);
            tracing::info!(ip = %ip, retry_after_secs, "rate limit exceeded");

            let mut response = AppError::RateLimited { retry_after_secs }.into_response();
            set_headers(response.headers_mut(), limit, 0, retry_after_secs);
            response
        }
    }
}

/// Extracts the rate limit key for `req`.
///
/// # Errors
///
/// Returns [`GovernorError::UnableToExtractKey`] when no address is available,
/// e.g. the server was started without connect info.
pub fn client_ip<T>(req: &Request<T>, behind_proxy: bool) -> Result<IpAddr, GovernorError> {
    if behind_proxy {
        SmartIpKeyExtractor.extract(req)
    } else {
        PeerIpKeyExtractor.extract(req)
    }
}

fn set_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset_secs: u64) {
    headers.insert(X_RATELIMIT_LIMIT.clone(), HeaderValue::from(limit));
    headers.insert(X_RATELIMIT_REMAINING.clone(), HeaderValue::from(remaining));
    headers.insert(X_RATELIMIT_RESET.clone(), HeaderValue::from(reset_secs));
}
