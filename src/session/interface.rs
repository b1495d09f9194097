use crate::constants::{API_KEY_COOKIE, AUTH_COOKIE};
use crate::error::AppError;
use async_trait::async_trait;

/// Session state for authenticated VRChat API requests
///
/// Holds the two opaque tokens the protocol runs on: the pre-session key
/// issued by the configuration endpoint and the session token issued on
/// login. The token is empty until authentication succeeds.
#[derive(Debug, Clone)]
pub struct VrcSession {
    /// Pre-session key, required as a cookie on invite requests
    pub api_key: String,
    /// Session token obtained on successful login
    pub auth_token: String,
}

impl VrcSession {
    /// Creates a session from the two tokens
    pub fn new(api_key: String, auth_token: String) -> Self {
        Self {
            api_key,
            auth_token,
        }
    }

    /// Whether login has produced a session token
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.auth_token.is_empty()
    }

    /// Cookie header value carrying both tokens, as invite requests expect
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!(
            "{}={}; {}={}",
            API_KEY_COOKIE, self.api_key, AUTH_COOKIE, self.auth_token
        )
    }

    /// Cookie header value carrying only the session token, as logout expects
    #[must_use]
    pub fn auth_cookie(&self) -> String {
        format!("{}={}", AUTH_COOKIE, self.auth_token)
    }
}

/// Operations of the VRChat session protocol, in the order a run performs them
#[async_trait]
pub trait VrcAuthenticator {
    /// Fetches the pre-session key from the configuration endpoint
    ///
    /// # Returns
    /// * `Ok(String)` - The non-empty pre-session key
    /// * `Err(AppError)` - If the call fails or the key cookie is absent
    async fn fetch_api_key(&self) -> Result<String, AppError>;

    /// Authenticates with the configured credentials
    ///
    /// # Arguments
    /// * `api_key` - Pre-session key obtained from `fetch_api_key`; must be non-empty
    ///
    /// # Returns
    /// * `Ok(VrcSession)` - Session carrying both tokens
    /// * `Err(AppError)` - If the call fails or no session token was issued
    async fn login(&self, api_key: String) -> Result<VrcSession, AppError>;

    /// Releases the session on the server
    ///
    /// # Arguments
    /// * `session` - The session to release
    async fn logout(&self, session: &VrcSession) -> Result<(), AppError>;
}
