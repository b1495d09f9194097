/// Base URL for the VRChat REST API
pub const BASE_URL: &str = "https://api.vrchat.cloud/api/1";
/// Path of the configuration endpoint that issues the pre-session key
pub const CONFIG_PATH: &str = "config";
/// Path of the login endpoint (HTTP Basic authentication)
pub const LOGIN_PATH: &str = "auth/user";
/// Path prefix of the per-target invite-request endpoint
pub const INVITE_PATH: &str = "requestInvite";
/// Path of the logout endpoint
pub const LOGOUT_PATH: &str = "logout";
/// Name of the cookie carrying the pre-session key
pub const API_KEY_COOKIE: &str = "apiKey";
/// Name of the cookie carrying the session token
pub const AUTH_COOKIE: &str = "auth";
/// Seconds to wait before each invite request
pub const REQUEST_INTERVAL_SECS: u64 = 30;
/// Timeout in seconds for individual HTTP requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "Rust-Invite-Client/0.1.0";
