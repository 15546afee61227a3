//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::AcceptService;
use crate::infrastructure::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub accept_service: Arc<AcceptService>,
    pub rate_limiter: Arc<RateLimiter>,
    /// When true, the rate limit key comes from proxy headers.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        accept_service: Arc<AcceptService>,
        rate_limiter: Arc<RateLimiter>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            accept_service,
            rate_limiter,
            behind_proxy,
        }
    }
}
