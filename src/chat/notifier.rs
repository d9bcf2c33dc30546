use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

use crate::game::Notification;
use crate::shared::ChatId;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification rejected by transport: {0}")]
    Rejected(String),
}

/// Outbound side of the chat transport
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: ChatId, notification: &Notification)
        -> Result<(), NotifyError>;
}

/// A notification addressed to a chat, with its rendered text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub notification: Notification,
}

/// Fans notifications out to every subscriber, e.g. connected WebSockets
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<OutboundMessage>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OutboundMessage> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl Notifier for BroadcastNotifier {
    async fn notify(
        &self,
        chat_id: ChatId,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let message = OutboundMessage {
            chat_id,
            text: notification.render(),
            notification: notification.clone(),
        };

        match self.sender.send(message) {
            Ok(receiver_count) => {
                debug!(
                    chat_id = %chat_id,
                    receivers = receiver_count,
                    "Notification broadcast"
                );
            }
            Err(_) => {
                debug!(chat_id = %chat_id, "Notification broadcast with no receivers");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_rendered_notifications() {
        let notifier = BroadcastNotifier::new(10);
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();
        assert_eq!(notifier.subscriber_count(), 2);

        notifier
            .notify(ChatId(-5), &Notification::AutoModeDisabled)
            .await
            .unwrap();

        for receiver in [&mut first, &mut second] {
            let message = receiver.recv().await.unwrap();
            assert_eq!(message.chat_id, ChatId(-5));
            assert_eq!(message.text, "Auto mode stopped.");
            assert_eq!(message.notification, Notification::AutoModeDisabled);
        }
    }

    #[tokio::test]
    async fn test_no_subscribers_is_not_an_error() {
        let notifier = BroadcastNotifier::default();
        let result = notifier
            .notify(ChatId(-5), &Notification::info("hello"))
            .await;
        assert!(result.is_ok());
    }
}
