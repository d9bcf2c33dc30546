use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use vocab_game::{
    chat::{NotifyError, PrivilegeCheck},
    ChatId, Notification, Notifier, PlayerId,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Clone, Default)]
pub struct MockNotifier {
    sent: Arc<RwLock<Vec<(ChatId, Notification)>>>,
    failing: Arc<RwLock<bool>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent
            .read()
            .await
            .iter()
            .map(|(_, notification)| notification.clone())
            .collect()
    }

    pub async fn sent_to(&self, chat_id: ChatId) -> Vec<Notification> {
        self.sent
            .read()
            .await
            .iter()
            .filter(|(target, _)| *target == chat_id)
            .map(|(_, notification)| notification.clone())
            .collect()
    }

    pub async fn clear(&self) {
        self.sent.write().await.clear();
    }

    /// Makes every following send fail, like a rate-limited transport
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(
        &self,
        chat_id: ChatId,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        if *self.failing.read().await {
            return Err(NotifyError::Rejected("too many requests".to_string()));
        }
        self.sent
            .write()
            .await
            .push((chat_id, notification.clone()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockAdminList {
    admins: Arc<RwLock<HashSet<PlayerId>>>,
}

impl MockAdminList {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn promote(&self, player_id: PlayerId) {
        self.admins.write().await.insert(player_id);
    }
}

#[async_trait]
impl PrivilegeCheck for MockAdminList {
    async fn is_elevated(&self, _chat_id: ChatId, player_id: PlayerId) -> bool {
        self.admins.read().await.contains(&player_id)
    }
}
