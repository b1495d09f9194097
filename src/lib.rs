//! Client for the VRChat REST API invite-request flow
//!
//! This crate drives a fixed session protocol: fetch a pre-session key from
//! the configuration endpoint, authenticate with Basic credentials to obtain
//! a session token, send a number of timed invite requests carrying both
//! tokens, then log out.
//!
//! # Example
//! ```ignore
//! use invite_client::application::runner::run_invite_session;
//! use invite_client::config::Config;
//!
//! let config = Config::new("alice".into(), "secret".into());
//! run_invite_session(&config, "usr_target", 3).await?;
//! ```

/// Invite service and session orchestration
pub mod application;
/// Client configuration
pub mod config;
/// Endpoint, cookie, and timing constants
pub mod constants;
/// Crate-wide error type
pub mod error;
/// Convenient re-exports of the commonly used types
pub mod prelude;
/// Session state and authentication
pub mod session;
/// Logging utilities
pub mod utils;

/// Crate version as compiled into the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
