// Reference HTTP transport: inbound chat events over POST, read-only game
// views, and a WebSocket feed of outbound notifications.

// Public API
pub use handlers::{get_leaderboard, get_round, post_event};
pub use socket::notifications_ws;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::shared::AppState;

// Internal modules
mod handlers;
mod socket;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Vocabulary game" }))
        .route("/events", post(post_event))
        .route("/leaderboard", get(get_leaderboard))
        .route("/round", get(get_round))
        .route("/ws", get(notifications_ws))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
