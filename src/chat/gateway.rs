use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::commands::Command;
use super::notifier::Notifier;
use super::privileges::PrivilegeCheck;
use crate::game::{GameController, GameError, Notification};
use crate::round::ScoringEvent;
use crate::shared::{ChatId, PlayerId};

/// One chat message as delivered by the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub player_id: PlayerId,
    pub display_name: String,
    pub chat_id: ChatId,
    pub text: String,
}

/// What the gateway did with an inbound event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GatewayOutcome {
    /// The event came from a chat the game does not run in
    ForeignChat,
    /// A command was run; `accepted` is false when a precondition failed
    Command { command: Command, accepted: bool },
    /// A regular message, with the scoring event it produced
    Utterance { event: Option<ScoringEvent> },
}

/// Entry point for everything said in the game chat.
///
/// Commands are routed to the controller after any required privilege check;
/// everything else is scored as an utterance.
pub struct ChatGateway {
    controller: GameController,
    privileges: Arc<dyn PrivilegeCheck>,
    notifier: Arc<dyn Notifier>,
}

impl ChatGateway {
    pub fn new(
        controller: GameController,
        privileges: Arc<dyn PrivilegeCheck>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            controller,
            privileges,
            notifier,
        }
    }

    #[instrument(skip(self, event), fields(chat_id = %event.chat_id, player_id = %event.player_id))]
    pub async fn handle(&self, event: InboundEvent) -> GatewayOutcome {
        if event.chat_id != self.controller.chat_id() {
            debug!("Ignoring event from another chat");
            return GatewayOutcome::ForeignChat;
        }

        match Command::parse(&event.text) {
            Some(command) => {
                let accepted = self.run_command(command, event.player_id).await;
                GatewayOutcome::Command { command, accepted }
            }
            None => {
                let scored = self
                    .controller
                    .handle_utterance(event.player_id, &event.display_name, &event.text)
                    .await;
                GatewayOutcome::Utterance { event: scored }
            }
        }
    }

    async fn run_command(&self, command: Command, player_id: PlayerId) -> bool {
        info!(command = %command, player_id = %player_id, "Running command");

        if command.requires_elevation()
            && !self
                .privileges
                .is_elevated(self.controller.chat_id(), player_id)
                .await
        {
            info!(command = %command, player_id = %player_id, "Command requires elevation");
            self.reply(Notification::info(GameError::NotElevated.to_string()))
                .await;
            return false;
        }

        let result = match command {
            Command::Play => self.controller.start_round_manual().await.map(|_| ()),
            Command::Auto => self.controller.enable_auto().await.map(|_| ()),
            Command::Stop => self.controller.disable_auto().await,
            Command::StopRound => self.controller.stop_round_manual().await.map(|_| ()),
            Command::Score => {
                let entries = self.controller.leaderboard().await;
                self.reply(Notification::Leaderboard { entries }).await;
                Ok(())
            }
            Command::Rules => {
                self.reply(Notification::Rules).await;
                Ok(())
            }
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                info!(command = %command, reason = %e, "Command refused");
                self.reply(Notification::info(e.to_string())).await;
                false
            }
        }
    }

    async fn reply(&self, notification: Notification) {
        let chat_id = self.controller.chat_id();
        if let Err(e) = self.notifier.notify(chat_id, &notification).await {
            warn!(chat_id = %chat_id, error = %e, "Failed to send reply");
        }
    }
}
