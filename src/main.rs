use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_game::{
    chat::{BroadcastNotifier, ChatGateway, StaticAdminList},
    config::GameConfig,
    game::GameController,
    http,
    shared::AppState,
    words::WordBank,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocab_game=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vocabulary game server");

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let words = match &config.words_file {
        Some(path) => WordBank::from_file(path),
        None => WordBank::embedded(),
    };
    let words = match words {
        Ok(words) => words,
        Err(e) => {
            error!(error = %e, "Failed to load word catalog");
            return ExitCode::FAILURE;
        }
    };

    let privileges = StaticAdminList::new(config.admin_ids.iter().copied());
    if privileges.is_empty() {
        warn!("No admin ids configured, /auto and /stop will be refused");
    }
    info!(
        chat_id = %config.chat_id,
        words = words.len(),
        admins = privileges.len(),
        round_interval_secs = config.round_interval.as_secs(),
        "Game configured"
    );

    let notifications = BroadcastNotifier::default();
    let notifier = Arc::new(notifications.clone());
    let controller = GameController::new(
        config.chat_id,
        words,
        notifier.clone(),
        config.round_interval,
    );
    let gateway = Arc::new(ChatGateway::new(
        controller.clone(),
        Arc::new(privileges),
        notifier,
    ));

    let app = http::router(AppState::new(gateway, controller, notifications));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.bind_addr, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!("Server running on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped with an error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
