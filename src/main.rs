use clap::Parser;
use invite_client::application::runner::run_invite_session;
use invite_client::config::Config;
use invite_client::utils::logger::setup_logger;
use tracing::{error, info};

/// Sends timed, repeated invite requests through the VRChat API
#[derive(Parser)]
#[command(name = "invite-client", version, about)]
struct Cli {
    /// Username of the VRChat account
    username: String,
    /// Password of the VRChat account
    password: String,
    /// User id of the invite target
    target: String,
    /// Number of invite requests to send
    count: u32,
}

#[tokio::main]
async fn main() {
    setup_logger();

    let cli = Cli::parse();
    let config = Config::new(cli.username, cli.password);

    if let Err(e) = run_invite_session(&config, &cli.target, cli.count).await {
        error!("Session failed: {}", e);
        std::process::exit(1);
    }

    info!("Finished sending requests");
}
