//! Invite-request service
//!
//! Sends the repeated, timed invite requests that make up the body of a
//! session run. Requests are strictly sequential: each tick waits the
//! configured interval, then the call must complete before the next tick
//! is awaited.

use crate::constants::{INVITE_PATH, USER_AGENT};
use crate::{config::Config, error::AppError, session::interface::VrcSession};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info};

/// Service for sending invite requests to a target user
#[async_trait]
pub trait InviteService {
    /// Sends a single invite request to the target
    ///
    /// # Arguments
    /// * `session` - Authenticated session carrying both tokens
    /// * `target` - User id of the invite target
    async fn send_invite(&self, session: &VrcSession, target: &str) -> Result<(), AppError>;

    /// Sends `count` invite requests, each preceded by the configured interval
    ///
    /// A transport error or non-200 response aborts immediately, leaving the
    /// remaining iterations unsent. `count = 0` performs no calls.
    ///
    /// # Arguments
    /// * `session` - Authenticated session carrying both tokens
    /// * `target` - User id of the invite target
    /// * `count` - Number of invite requests to send
    async fn send_repeated(
        &self,
        session: &VrcSession,
        target: &str,
        count: u32,
    ) -> Result<(), AppError>;
}

/// Implementation of the invite service backed by the VRChat REST API
pub struct InviteServiceImpl<'a> {
    cfg: &'a Config,
    http: Client,
}

impl<'a> InviteServiceImpl<'a> {
    /// Creates a new invite service
    ///
    /// # Arguments
    /// * `cfg` - Reference to the configuration
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            http: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(cfg.rest_api.timeout))
                .build()
                .expect("reqwest client"),
        }
    }

    fn invite_url(&self, target: &str) -> String {
        format!(
            "{}/{}/{}",
            self.cfg.rest_api.base_url.trim_end_matches('/'),
            INVITE_PATH,
            target
        )
    }
}

#[async_trait]
impl InviteService for InviteServiceImpl<'_> {
    async fn send_invite(&self, session: &VrcSession, target: &str) -> Result<(), AppError> {
        let url = self.invite_url(target);

        // messageSlot selects the canned invite message; slot 0 throughout.
        let body = serde_json::json!({
            "messageSlot": 0
        });

        debug!("Invite request to URL: {}", url);

        let resp = self
            .http
            .post(url)
            .header("Cookie", session.cookie_header())
            .json(&body)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                info!("Sent invite request to {}", target);
                Ok(())
            }
            other => {
                error!("Invite request failed with status: {}", other);
                let body = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read response body".to_string());
                error!("Response body: {}", body);
                Err(AppError::Unexpected(other))
            }
        }
    }

    async fn send_repeated(
        &self,
        session: &VrcSession,
        target: &str,
        count: u32,
    ) -> Result<(), AppError> {
        if target.is_empty() {
            return Err(AppError::InvalidInput(
                "invite target must not be empty".to_string(),
            ));
        }

        let interval = Duration::from_secs(self.cfg.interval_seconds);

        for sent in 0..count {
            tokio::time::sleep(interval).await;
            self.send_invite(session, target).await?;
            debug!("Invite {} of {} sent", sent + 1, count);
        }

        Ok(())
    }
}
