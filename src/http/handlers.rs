use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::chat::{GatewayOutcome, InboundEvent};
use crate::round::RoundView;
use crate::scores::LeaderboardEntry;
use crate::shared::{AppError, AppState};

/// HTTP handler for inbound chat messages
///
/// POST /events
/// Returns what the game did with the message
#[instrument(name = "post_event", skip(state, event), fields(chat_id = %event.chat_id))]
pub async fn post_event(
    State(state): State<AppState>,
    Json(event): Json<InboundEvent>,
) -> Result<Json<GatewayOutcome>, AppError> {
    if event.display_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "display_name cannot be empty".to_string(),
        ));
    }

    let outcome = state.gateway.handle(event).await;
    info!(outcome = ?outcome, "Chat event handled");

    Ok(Json(outcome))
}

/// GET /leaderboard
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    Ok(Json(state.controller.leaderboard().await))
}

/// GET /round
/// Returns the active round without its answer, or `null`
#[instrument(name = "get_round", skip(state))]
pub async fn get_round(
    State(state): State<AppState>,
) -> Result<Json<Option<RoundView>>, AppError> {
    Ok(Json(state.controller.current_round_view().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{BroadcastNotifier, ChatGateway};
    use crate::http::router;
    use crate::shared::test_utils::{admins, ControllerBuilder, TEST_CHAT};
    use crate::shared::PlayerId;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        let notifications = BroadcastNotifier::default();
        let notifier = Arc::new(notifications.clone());
        let controller = ControllerBuilder::new()
            .with_notifier(notifier.clone())
            .build();
        let gateway = Arc::new(ChatGateway::new(
            controller.clone(),
            admins(&[1]),
            notifier,
        ));
        router(AppState::new(gateway, controller, notifications))
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/events")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn chat_event(player_id: i64, text: &str) -> Value {
        json!({
            "player_id": player_id,
            "display_name": format!("player-{player_id}"),
            "chat_id": TEST_CHAT,
            "text": text,
        })
    }

    #[tokio::test]
    async fn test_round_is_null_when_idle() {
        let response = app().oneshot(get("/round")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, Value::Null);
    }

    #[tokio::test]
    async fn test_play_then_translate_flow() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post(chat_event(5, "/play")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let outcome = body_json(response).await;
        assert_eq!(outcome["outcome"], "command");
        assert_eq!(outcome["accepted"], true);

        let response = app.clone().oneshot(get("/round")).await.unwrap();
        let round = body_json(response).await;
        assert_eq!(round["native"], "дом");
        assert_eq!(round["translation_settled"], false);

        let response = app
            .clone()
            .oneshot(post(chat_event(5, "das Haus")))
            .await
            .unwrap();
        let outcome = body_json(response).await;
        assert_eq!(outcome["outcome"], "utterance");
        assert_eq!(outcome["event"]["kind"], "translated");
        assert_eq!(outcome["event"]["player_id"], 5);

        let response = app.oneshot(get("/leaderboard")).await.unwrap();
        let leaderboard = body_json(response).await;
        assert_eq!(
            leaderboard,
            json!([{ "player_id": 5, "display_name": "player-5", "points": 1 }])
        );
    }

    #[tokio::test]
    async fn test_foreign_chat_event() {
        let mut event = chat_event(5, "/play");
        event["chat_id"] = json!(12345);

        let response = app().oneshot(post(event)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["outcome"], "foreign_chat");
    }

    #[tokio::test]
    async fn test_blank_display_name_is_rejected() {
        let mut event = chat_event(5, "hallo");
        event["display_name"] = json!("  ");

        let response = app().oneshot(post(event)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "display_name cannot be empty"
        );
    }

    #[tokio::test]
    async fn test_malformed_event_is_rejected() {
        let response = app()
            .oneshot(post(json!({ "player_id": PlayerId(1), "text": "hi" })))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
