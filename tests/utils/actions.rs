use vocab_game::{ChatId, GatewayOutcome, InboundEvent, ScoringEvent};

use super::setup::{TestSetup, GAME_CHAT};

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a message to the game chat as the named player
    pub async fn send(&self, player: &str, text: &str) -> GatewayOutcome {
        self.send_to(GAME_CHAT, player, text).await
    }

    /// Send a message to an arbitrary chat as the named player
    pub async fn send_to(&self, chat_id: ChatId, player: &str, text: &str) -> GatewayOutcome {
        let event = InboundEvent {
            player_id: self.player_id(player),
            display_name: capitalize(player),
            chat_id,
            text: text.to_string(),
        };
        self.gateway.handle(event).await
    }

    /// Send a regular message and return the scoring event it produced
    pub async fn say(&self, player: &str, text: &str) -> Option<ScoringEvent> {
        match self.send(player, text).await {
            GatewayOutcome::Utterance { event } => event,
            other => panic!("expected an utterance outcome, got {:?}", other),
        }
    }

    /// Send a command and return whether it was accepted
    pub async fn command(&self, player: &str, command: &str) -> bool {
        match self.send(player, command).await {
            GatewayOutcome::Command { accepted, .. } => accepted,
            other => panic!("expected a command outcome, got {:?}", other),
        }
    }

    pub async fn points(&self, player: &str) -> u32 {
        self.controller.points(self.player_id(player)).await
    }

    /// Clear all recorded notifications
    pub async fn clear_notifications(&self) {
        self.notifier.clear().await;
    }
}

/// Display names are the capitalized test handles, e.g. "anna" -> "Anna"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
