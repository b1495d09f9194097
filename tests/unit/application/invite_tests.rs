use invite_client::application::invite::{InviteService, InviteServiceImpl};
use invite_client::config::{Config, Credentials, RestApiConfig};
use invite_client::error::AppError;
use invite_client::session::interface::VrcSession;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tokio_test::block_on;

// Helper function to create a test config pointed at the mock server
fn create_test_config(server_url: &str, interval_seconds: u64) -> Config {
    Config {
        credentials: Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 30,
        },
        interval_seconds,
    }
}

fn test_session() -> VrcSession {
    VrcSession::new("XYZ".to_string(), "ABC123".to_string())
}

#[test]
fn test_send_repeated_sends_exactly_count_requests() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/requestInvite/room42")
        .match_header("Cookie", "apiKey=XYZ; auth=ABC123")
        .match_header("Content-Type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"messageSlot": 0})))
        .with_status(200)
        .expect(3)
        .create();

    let config = create_test_config(&server.url(), 0);
    let service = InviteServiceImpl::new(&config);

    block_on(service.send_repeated(&test_session(), "room42", 3))
        .expect("Send loop should succeed");

    mock.assert();
}

#[test]
fn test_send_repeated_with_zero_count_sends_nothing() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/requestInvite/room42")
        .with_status(200)
        .expect(0)
        .create();

    let config = create_test_config(&server.url(), 0);
    let service = InviteServiceImpl::new(&config);

    block_on(service.send_repeated(&test_session(), "room42", 0))
        .expect("Zero count should succeed immediately");

    mock.assert();
}

#[test]
fn test_send_repeated_aborts_on_non_200() {
    let mut server = Server::new();

    // Only the first request must go out; the failure leaves the rest unsent
    let mock = server
        .mock("POST", "/requestInvite/room42")
        .with_status(500)
        .expect(1)
        .create();

    let config = create_test_config(&server.url(), 0);
    let service = InviteServiceImpl::new(&config);

    let err = block_on(service.send_repeated(&test_session(), "room42", 3))
        .expect_err("Send loop should fail");
    match err {
        AppError::Unexpected(status) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("Unexpected error: {:?}", other),
    }

    mock.assert();
}

#[test]
fn test_send_repeated_waits_the_interval_before_each_request() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/requestInvite/room42")
        .with_status(200)
        .expect(2)
        .create();

    let config = create_test_config(&server.url(), 1);
    let service = InviteServiceImpl::new(&config);

    let started = Instant::now();
    block_on(service.send_repeated(&test_session(), "room42", 2))
        .expect("Send loop should succeed");

    // One interval ahead of each of the two requests
    assert!(started.elapsed() >= Duration::from_secs(2));

    mock.assert();
}

#[test]
fn test_send_repeated_rejects_empty_target() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .expect(0)
        .create();

    let config = create_test_config(&server.url(), 0);
    let service = InviteServiceImpl::new(&config);

    let err = block_on(service.send_repeated(&test_session(), "", 1))
        .expect_err("Empty target should be rejected");
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("target")),
        other => panic!("Unexpected error: {:?}", other),
    }

    mock.assert();
}
