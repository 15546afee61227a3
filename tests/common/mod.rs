#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Extension, Router, extract::ConnectInfo};
use axum_test::TestServer;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use webmention_receiver::application::services::{
    AcceptService, Notifier, SiteValidator, TargetAuthorizer,
};
use webmention_receiver::domain::clients::{NotifyError, SiteError, SiteProbe, WebhookClient};
use webmention_receiver::domain::entities::NotificationPayload;
use webmention_receiver::infrastructure::rate_limit::RateLimiter;
use webmention_receiver::routes::build_router;
use webmention_receiver::state::AppState;

pub const TARGET_HOST: &str = "ezrizhu.com";
pub const FORM: &str = "application/x-www-form-urlencoded";

/// Site probe answering from a fixed table and recording every URL it was asked for.
///
/// URLs missing from the table fail with a transport error.
#[derive(Default)]
pub struct FakeSiteProbe {
    responses: HashMap<String, Result<u16, SiteError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSiteProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, response: Result<u16, SiteError>) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SiteProbe for FakeSiteProbe {
    async fn fetch_status(&self, url: &Url) -> Result<u16, SiteError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| Err(SiteError::Transport("connection refused".to_string())))
    }
}

/// Webhook client that records payloads and answers with a fixed status.
pub struct RecordingWebhook {
    status: u16,
    payloads: Mutex<Vec<NotificationPayload>>,
}

impl RecordingWebhook {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn payloads(&self) -> Vec<NotificationPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookClient for RecordingWebhook {
    async fn post(&self, payload: &NotificationPayload) -> Result<u16, NotifyError> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(self.status)
    }
}

pub fn create_test_state(
    probe: Arc<FakeSiteProbe>,
    webhook: Arc<RecordingWebhook>,
    rate_limit: u32,
    behind_proxy: bool,
) -> AppState {
    let accept_service = AcceptService::new(
        TargetAuthorizer::new(TARGET_HOST),
        SiteValidator::new(probe),
        Notifier::new(webhook),
    );

    AppState::new(
        Arc::new(accept_service),
        Arc::new(RateLimiter::new(rate_limit, Duration::from_secs(60))),
        behind_proxy,
    )
}

/// Router as served in production, with every request appearing to come from `peer`.
pub fn router_from(state: AppState, peer: SocketAddr) -> Router {
    build_router(state).layer(Extension(ConnectInfo(peer)))
}

pub fn test_server(state: AppState) -> TestServer {
    let peer: SocketAddr = "198.51.100.10:40000".parse().unwrap();
    TestServer::new(router_from(state, peer)).unwrap()
}

pub fn form_body(source: &str, target: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("source", source)
        .append_pair("target", target)
        .finish()
}
