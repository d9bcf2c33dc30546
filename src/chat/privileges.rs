use async_trait::async_trait;
use std::collections::HashSet;

use crate::shared::{ChatId, PlayerId};

/// Answers whether a player has administrative rights in a chat
#[async_trait]
pub trait PrivilegeCheck: Send + Sync {
    async fn is_elevated(&self, chat_id: ChatId, player_id: PlayerId) -> bool;
}

/// Fixed set of administrators, the same for every chat
#[derive(Debug, Clone, Default)]
pub struct StaticAdminList {
    admins: HashSet<PlayerId>,
}

impl StaticAdminList {
    pub fn new(admins: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

#[async_trait]
impl PrivilegeCheck for StaticAdminList {
    async fn is_elevated(&self, _chat_id: ChatId, player_id: PlayerId) -> bool {
        self.admins.contains(&player_id)
    }
}
