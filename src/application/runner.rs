//! Orchestration of a full invite session
//!
//! The four protocol steps run strictly in order: fetch the pre-session
//! key, authenticate, send the timed invite requests, log out. Logout runs
//! on every exit path that follows a successful login.

use crate::application::invite::{InviteService, InviteServiceImpl};
use crate::config::Config;
use crate::error::AppError;
use crate::session::auth::VrcAuth;
use crate::session::interface::VrcAuthenticator;
use tracing::{info, warn};

/// Runs one complete invite session against the configured API
///
/// Logout is attempted exactly once after any successful login, even when
/// the send loop failed. A logout failure becomes the run's error only when
/// it is the sole failure; an earlier send error takes precedence and the
/// logout failure is logged instead.
///
/// # Arguments
/// * `cfg` - Configuration with credentials and API settings
/// * `target` - User id of the invite target
/// * `count` - Number of invite requests to send
///
/// # Returns
/// * `Ok(())` - The full protocol completed, logout included
/// * `Err(AppError)` - The first failure of the run
pub async fn run_invite_session(cfg: &Config, target: &str, count: u32) -> Result<(), AppError> {
    let auth = VrcAuth::new(cfg);

    let api_key = auth.fetch_api_key().await?;
    let session = auth.login(api_key).await?;

    let service = InviteServiceImpl::new(cfg);
    let send_result = service.send_repeated(&session, target, count).await;

    let logout_result = auth.logout(&session).await;

    match (send_result, logout_result) {
        (Ok(()), Ok(())) => {
            info!("Session completed: {} invite request(s) sent", count);
            Ok(())
        }
        (Ok(()), Err(logout_err)) => Err(logout_err),
        (Err(send_err), Ok(())) => Err(send_err),
        (Err(send_err), Err(logout_err)) => {
            warn!("Logout also failed after send error: {}", logout_err);
            Err(send_err)
        }
    }
}
