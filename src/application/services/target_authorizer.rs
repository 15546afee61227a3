//! Authorization of mention targets.

use crate::domain::entities::SubmittedUrl;
use crate::error::AppError;

/// Accepts only targets on the single host this receiver is authoritative for.
#[derive(Debug, Clone)]
pub struct TargetAuthorizer {
    host: String,
}

impl TargetAuthorizer {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Checks the target's host against the configured one.
    ///
    /// The comparison is exact and case-sensitive on the host as the sender
    /// wrote it, port included. No network access happens here, so this runs
    /// before any reachability check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnauthorizedTarget`] on mismatch.
    pub fn authorize(&self, target: &SubmittedUrl) -> Result<(), AppError> {
        let host = target.presented_host();

        if host != self.host {
            tracing::info!(host = %host, "invalid target host");
            return Err(AppError::UnauthorizedTarget {
                host: host.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorizer() -> TargetAuthorizer {
        TargetAuthorizer::new("ezrizhu.com")
    }

    fn target(raw: &str) -> SubmittedUrl {
        SubmittedUrl::parse(raw).unwrap()
    }

    #[test]
    fn test_authorize_matching_host() {
        assert!(authorizer().authorize(&target("https://ezrizhu.com/blog/1")).is_ok());
        assert!(authorizer().authorize(&target("http://ezrizhu.com")).is_ok());
    }

    #[test]
    fn test_authorize_rejects_other_hosts() {
        let result = authorizer().authorize(&target("https://evil.com/blog/1"));

        match result {
            Err(AppError::UnauthorizedTarget { host }) => assert_eq!(host, "evil.com"),
            other => panic!("expected UnauthorizedTarget, got {other:?}"),
        }

        assert!(authorizer().authorize(&target("https://blog.ezrizhu.com/")).is_err());
        assert!(authorizer().authorize(&target("https://ezrizhu.com.evil.com/")).is_err());
    }

    #[test]
    fn test_authorize_does_not_normalize() {
        assert!(authorizer().authorize(&target("https://EZRIZHU.com/blog")).is_err());
        assert!(authorizer().authorize(&target("https://ezrizhu.com:443/blog")).is_err());
        assert!(authorizer().authorize(&target("https://ezrizhu.com./blog")).is_err());
    }

    #[test]
    fn test_authorize_host_with_port_when_configured() {
        let authorizer = TargetAuthorizer::new("localhost:8080");

        assert!(authorizer.authorize(&target("http://localhost:8080/post")).is_ok());
        assert!(authorizer.authorize(&target("http://localhost/post")).is_err());
    }
}
