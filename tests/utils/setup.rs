use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use vocab_game::{ChatGateway, ChatId, GameController, PlayerId, VocabEntry, WordBank};

use super::mocks::{MockAdminList, MockNotifier};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const GAME_CHAT: ChatId = ChatId(-1002322472598);

pub struct TestSetup {
    pub controller: GameController,
    pub gateway: ChatGateway,
    pub notifier: MockNotifier,
    pub admins: MockAdminList,
    pub players: HashMap<String, PlayerId>,
}

impl TestSetup {
    pub fn player_id(&self, name: &str) -> PlayerId {
        *self
            .players
            .get(name)
            .unwrap_or_else(|| panic!("unknown test player {name}"))
    }
}

pub struct TestSetupBuilder {
    players: Vec<String>,
    admins: Vec<String>,
    words: Vec<VocabEntry>,
    round_interval: Duration,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![],
            admins: vec![],
            words: vec![],
            round_interval: Duration::from_secs(2 * 60 * 60),
        }
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["anna", "boris", "carl"])
    }

    pub fn with_admin(mut self, name: &str) -> Self {
        self.admins.push(name.to_string());
        self
    }

    pub fn with_word(mut self, native: &str, target: &str, description: &str) -> Self {
        self.words.push(VocabEntry::new(native, target, description));
        self
    }

    pub fn with_round_interval(mut self, round_interval: Duration) -> Self {
        self.round_interval = round_interval;
        self
    }

    pub async fn build(self) -> TestSetup {
        let words = if self.words.is_empty() {
            WordBank::embedded().unwrap()
        } else {
            WordBank::new(self.words).unwrap()
        };

        let players: HashMap<String, PlayerId> = self
            .players
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), PlayerId(index as i64 + 1)))
            .collect();

        let notifier = MockNotifier::new();
        let admins = MockAdminList::new();
        for admin in &self.admins {
            let id = players
                .get(admin)
                .copied()
                .unwrap_or_else(|| panic!("admin {admin} is not a player"));
            admins.promote(id).await;
        }

        let controller = GameController::new(
            GAME_CHAT,
            words,
            Arc::new(notifier.clone()),
            self.round_interval,
        );
        let gateway = ChatGateway::new(
            controller.clone(),
            Arc::new(admins.clone()),
            Arc::new(notifier.clone()),
        );

        TestSetup {
            controller,
            gateway,
            notifier,
            admins,
            players,
        }
    }
}
