use crate::common;
use invite_client::prelude::*;

#[test]
#[ignore]
fn test_live_login_and_logout() {
    setup_logger();

    let config = common::live_config().expect("VRC_USERNAME and VRC_PASSWORD must be set");

    tokio_test::block_on(async {
        let auth = VrcAuth::new(&config);

        let api_key = auth
            .fetch_api_key()
            .await
            .expect("Failed to fetch pre-session key");
        assert!(!api_key.is_empty(), "Pre-session key should not be empty");

        let session = auth.login(api_key).await.expect("Failed to login");
        assert!(
            session.is_authenticated(),
            "Session token should be present"
        );
        info!("Login successful");

        auth.logout(&session).await.expect("Failed to log out");
    });
}
