use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS, REQUEST_INTERVAL_SECS};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the VRChat account
pub struct Credentials {
    /// Username for the VRChat account
    pub username: String,
    /// Password for the VRChat account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the VRChat REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the invite client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of seconds to wait before each invite request
    pub interval_seconds: u64,
}

impl Config {
    /// Creates a configuration for the given credentials
    ///
    /// Endpoint, timeout, and interval settings come from the compiled-in
    /// constants; there is no environment or file-based configuration.
    ///
    /// # Arguments
    ///
    /// * `username` - Username for the VRChat account
    /// * `password` - Password for the VRChat account
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new(username: String, password: String) -> Self {
        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: String::from(BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            interval_seconds: REQUEST_INTERVAL_SECS,
        }
    }
}
