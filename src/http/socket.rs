use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::stream::StreamExt;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, instrument, warn};

use crate::chat::OutboundMessage;
use crate::shared::AppState;

/// WebSocket upgrade handler
///
/// GET /ws
/// Streams every outbound notification as a JSON text frame
#[instrument(name = "notifications_ws", skip(state, ws))]
pub async fn notifications_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let receiver = state.notifications.subscribe();
    info!("Notification feed connection established");
    ws.on_upgrade(move |socket| stream_notifications(socket, receiver))
}

async fn stream_notifications(
    mut socket: WebSocket,
    mut receiver: broadcast::Receiver<OutboundMessage>,
) {
    loop {
        tokio::select! {
            outbound = receiver.recv() => {
                match outbound {
                    Ok(message) => {
                        let payload = match serde_json::to_string(&message) {
                            Ok(payload) => payload,
                            Err(e) => {
                                warn!(error = %e, "Failed to serialize notification");
                                continue;
                            }
                        };
                        if socket.send(Message::Text(payload)).await.is_err() {
                            debug!("Notification feed client went away");
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Notification feed lagged, dropping messages");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            inbound = socket.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // The feed is one-way
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    let _ = socket.send(Message::Close(None)).await;
    info!("Notification feed connection closed");
}
