//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound clients and the pipeline, spawns the rate limit
//! sweeper and runs the Axum server until a shutdown signal arrives.

use crate::application::services::{AcceptService, Notifier, SiteValidator, TargetAuthorizer};
use crate::config::Config;
use crate::infrastructure::http::{HttpSettings, ReqwestSiteProbe, ReqwestWebhookClient};
use crate::infrastructure::rate_limit::RateLimiter;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the webhook URL does not parse or an HTTP client
/// cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let settings = HttpSettings::from_config(config);
    let webhook_url = Url::parse(&config.webhook_url).context("WEBHOOK_URL is not a valid URL")?;

    let probe = ReqwestSiteProbe::new(settings).context("Failed to build site probe client")?;
    let webhook = ReqwestWebhookClient::new(webhook_url, settings)
        .context("Failed to build webhook client")?;

    let accept_service = AcceptService::new(
        TargetAuthorizer::new(config.target_host.clone()),
        SiteValidator::new(Arc::new(probe)),
        Notifier::new(Arc::new(webhook)),
    );

    let rate_limiter = RateLimiter::new(config.rate_limit_requests, config.rate_limit_window());

    Ok(AppState::new(
        Arc::new(accept_service),
        Arc::new(rate_limiter),
        config.behind_proxy,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Site probe and webhook clients
/// - Accept pipeline
/// - Background rate limit sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(limiter.window());
        loop {
            interval.tick().await;
            let evicted = limiter.sweep();
            if evicted > 0 {
                tracing::debug!(evicted, "Evicted expired rate limit windows");
            }
        }
    });
    tracing::info!("Rate limit sweeper started");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
