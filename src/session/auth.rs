// Authentication handler for the VRChat API

use crate::constants::{
    API_KEY_COOKIE, AUTH_COOKIE, CONFIG_PATH, LOGIN_PATH, LOGOUT_PATH, USER_AGENT,
};
use crate::{
    config::Config,
    error::AppError,
    session::interface::{VrcAuthenticator, VrcSession},
    session::response::cookie_value,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Authentication handler for the VRChat API
pub struct VrcAuth<'a> {
    pub(crate) cfg: &'a Config,
    http: Client,
}

impl<'a> VrcAuth<'a> {
    /// Creates a new authentication handler
    ///
    /// # Arguments
    /// * `cfg` - Reference to the configuration
    ///
    /// # Returns
    /// * A new VrcAuth instance
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

    /// Joins the configured base URL with an endpoint path
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl VrcAuthenticator for VrcAuth<'_> {
    async fn fetch_api_key(&self) -> Result<String, AppError> {
        let url = self.rest_url(CONFIG_PATH);

        debug!("Pre-session key request to URL: {}", url);

        let resp = self.http.get(url).send().await?;

        debug!("Config response status: {}", resp.status());
        trace!("Response headers: {:#?}", resp.headers());

        // The configuration endpoint signals success through the cookie,
        // not the status line.
        match cookie_value(&resp, API_KEY_COOKIE) {
            Some(api_key) => {
                debug!(
                    "Successfully obtained pre-session key of length: {}",
                    api_key.len()
                );
                Ok(api_key)
            }
            None => {
                error!("{} cookie not found in config response", API_KEY_COOKIE);
                Err(AppError::MissingCookie(API_KEY_COOKIE))
            }
        }
    }

    async fn login(&self, api_key: String) -> Result<VrcSession, AppError> {
        if api_key.is_empty() {
            error!("Refusing to authenticate without a pre-session key");
            return Err(AppError::InvalidInput(
                "pre-session key must not be empty".to_string(),
            ));
        }

        let url = self.rest_url(LOGIN_PATH);
        let username = self.cfg.credentials.username.trim();
        let password = self.cfg.credentials.password.trim();

        debug!("Login request to URL: {}", url);
        debug!("Using username: {}", username);

        let resp = self
            .http
            .get(url)
            .basic_auth(username, Some(password))
            .send()
            .await?;

        let status = resp.status();
        debug!("Login response status: {}", status);
        trace!("Response headers: {:#?}", resp.headers());

        // A rejected login carries no session cookie, so the cookie lookup
        // decides regardless of the status line.
        match cookie_value(&resp, AUTH_COOKIE) {
            Some(auth_token) => {
                debug!(
                    "Successfully obtained session token of length: {}",
                    auth_token.len()
                );
                info!("✓ Login successful, user: {}", username);
                Ok(VrcSession::new(api_key, auth_token))
            }
            None => {
                error!("Authentication failed with status: {}", status);
                let body = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read response body".to_string());
                error!("Response body: {}", body);
                Err(AppError::BadCredentials)
            }
        }
    }

    async fn logout(&self, session: &VrcSession) -> Result<(), AppError> {
        let url = self.rest_url(LOGOUT_PATH);

        debug!("Logout request to URL: {}", url);

        let resp = self
            .http
            .put(url)
            .header("Cookie", session.auth_cookie())
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                info!("✓ Logged out successfully");
                Ok(())
            }
            other => {
                error!("Logout failed with status: {}", other);
                let body = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read response body".to_string());
                error!("Response body: {}", body);
                Err(AppError::Unexpected(other))
            }
        }
    }
}
