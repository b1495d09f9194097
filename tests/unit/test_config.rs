use invite_client::config::Config;
use invite_client::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS, REQUEST_INTERVAL_SECS};

#[test]
fn test_config_new_uses_compiled_in_defaults() {
    let config = Config::new("alice".to_string(), "secret".to_string());

    assert_eq!(config.credentials.username, "alice");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.rest_api.base_url, BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.interval_seconds, REQUEST_INTERVAL_SECS);
}

#[test]
fn test_version_matches_manifest() {
    assert_eq!(invite_client::version(), env!("CARGO_PKG_VERSION"));
    assert!(!invite_client::VERSION.is_empty());
}
