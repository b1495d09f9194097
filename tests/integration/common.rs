// Common utilities for integration tests

use invite_client::prelude::*;

/// Builds a config from live account credentials in the environment
///
/// These tests are ignored by default; run them against a real account with
/// `VRC_USERNAME` and `VRC_PASSWORD` set and `cargo test -- --ignored`.
pub fn live_config() -> Option<Config> {
    let username = std::env::var("VRC_USERNAME").ok()?;
    let password = std::env::var("VRC_PASSWORD").ok()?;
    Some(Config::new(username, password))
}
