//! The Webmention accept pipeline.

use crate::application::services::{Notifier, SiteValidator, TargetAuthorizer};
use crate::domain::entities::{AcceptRequest, SubmittedUrl, ValidatedUrl};
use crate::error::AppError;

/// Runs one parsed claim through authorization, verification and delivery.
///
/// # Ordering
///
/// 1. Target host authorization (no network)
/// 2. Target reachability
/// 3. Source reachability
/// 4. Webhook notification
///
/// Each step short-circuits on failure and network calls never overlap.
/// Either the whole pipeline completes and exactly one notification is sent,
/// or nothing is sent.
pub struct AcceptService {
    authorizer: TargetAuthorizer,
    validator: SiteValidator,
    notifier: Notifier,
}

impl AcceptService {
    pub fn new(authorizer: TargetAuthorizer, validator: SiteValidator, notifier: Notifier) -> Self {
        Self {
            authorizer,
            validator,
            notifier,
        }
    }

    /// Accepts a mention.
    ///
    /// # Errors
    ///
    /// - [`AppError::UnauthorizedTarget`] if the target is on another host
    /// - [`AppError::Unreachable`] if the target or source fails verification
    /// - [`AppError::Delivery`] if the webhook did not acknowledge with 204
    #[tracing::instrument(
        name = "accept",
        skip_all,
        fields(source = %request.source, target = %request.target)
    )]
    pub async fn accept(&self, request: AcceptRequest) -> Result<(), AppError> {
        let AcceptRequest { source, target } = request;

        self.authorizer.authorize(&target)?;

        let target = self.verify("target", target).await?;
        let source = self.verify("source", source).await?;

        if let Err(e) = self.notifier.notify(&source, &target).await {
            tracing::error!(error = %e, "error sending webhook");
            return Err(AppError::Delivery(e));
        }

        tracing::info!("mention accepted");
        Ok(())
    }

    async fn verify(&self, field: &'static str, url: SubmittedUrl) -> Result<ValidatedUrl, AppError> {
        let raw = url.as_str().to_string();

        self.validator.validate(url).await.map_err(|source| {
            tracing::info!(field, url = %raw, error = %source, "site verification failed");
            AppError::Unreachable {
                field,
                url: raw,
                source,
            }
        })
    }
}
