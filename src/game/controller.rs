use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::errors::GameError;
use super::notifications::Notification;
use super::scheduler::RoundScheduler;
use crate::chat::Notifier;
use crate::round::{classify, Round, RoundTrigger, RoundView, ScoringEvent, Utterance};
use crate::scores::{LeaderboardEntry, ScoreBoard};
use crate::shared::{ChatId, PlayerId};
use crate::words::WordBank;

/// Period between automatic rounds
pub const DEFAULT_ROUND_INTERVAL: Duration = Duration::from_secs(2 * 60 * 60);

/// Everything that must change atomically: the round, the scores and the
/// auto-mode flag share one lock.
#[derive(Default)]
struct GameState {
    round: Option<Round>,
    scores: ScoreBoard,
    scheduler: RoundScheduler,
}

impl GameState {
    /// Applies a classified event to the round and the scores. Returns the
    /// announcement, or `None` if the event no longer applies.
    fn apply(&mut self, event: ScoringEvent) -> Option<Notification> {
        let GameState { round, scores, .. } = self;
        let round = round.as_mut()?;

        let notification = match event {
            ScoringEvent::Translated { player_id, points } => {
                if !round.settle_translation(player_id) {
                    return None;
                }
                scores.award(player_id, points);
                Notification::TranslationWon {
                    player_name: scores.display_name(player_id).to_string(),
                    native: round.entry().native.clone(),
                    target: round.entry().target.clone(),
                    points,
                }
            }
            ScoringEvent::TooLate { player_id, winner } => Notification::TooLate {
                player_name: scores.display_name(player_id).to_string(),
                winner_name: scores.display_name(winner).to_string(),
            },
            ScoringEvent::Explained { player_id, points } => {
                if !round.record_explanation(player_id) {
                    return None;
                }
                scores.award(player_id, points);
                Notification::Explained {
                    player_name: scores.display_name(player_id).to_string(),
                    points,
                }
            }
            ScoringEvent::SentenceMade { player_id, points } => {
                scores.award(player_id, points);
                Notification::SentenceMade {
                    player_name: scores.display_name(player_id).to_string(),
                    target: round.entry().target.clone(),
                    points,
                }
            }
            ScoringEvent::TaskDone { player_id, points } => {
                scores.award(player_id, points);
                Notification::TaskDone {
                    player_name: scores.display_name(player_id).to_string(),
                    points,
                }
            }
        };

        Some(notification)
    }
}

/// Owns the game for the single chat it serves.
///
/// Cloning is cheap and every clone drives the same game. Mutations happen
/// under one lock; notifications are sent after the lock is released, and a
/// failed send never undoes a mutation.
#[derive(Clone)]
pub struct GameController {
    chat_id: ChatId,
    words: WordBank,
    notifier: Arc<dyn Notifier>,
    round_interval: Duration,
    state: Arc<Mutex<GameState>>,
}

impl GameController {
    pub fn new(
        chat_id: ChatId,
        words: WordBank,
        notifier: Arc<dyn Notifier>,
        round_interval: Duration,
    ) -> Self {
        Self {
            chat_id,
            words,
            notifier,
            round_interval,
            state: Arc::new(Mutex::new(GameState::default())),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn round_interval(&self) -> Duration {
        self.round_interval
    }

    /// Scores a chat message. Returns the event that was applied, if any.
    #[instrument(skip(self, display_name, text), fields(chat_id = %self.chat_id))]
    pub async fn handle_utterance(
        &self,
        player_id: PlayerId,
        display_name: &str,
        text: &str,
    ) -> Option<ScoringEvent> {
        if text.trim().is_empty() {
            debug!("Ignoring empty message");
            return None;
        }

        let (event, notification) = {
            let mut state = self.state.lock().await;
            state.scores.record_name(player_id, display_name);

            let event = classify(state.round.as_ref(), &Utterance::new(player_id, text))?;
            let notification = state.apply(event)?;

            info!(
                event = ?event,
                total_points = state.scores.points(player_id),
                "Applied scoring event"
            );
            (event, notification)
        };

        self.dispatch(&[notification]).await;
        Some(event)
    }

    /// Starts a round unless auto mode owns round starting
    #[instrument(skip(self), fields(chat_id = %self.chat_id))]
    pub async fn start_round_manual(&self) -> Result<RoundView, GameError> {
        let (view, notification) = {
            let mut state = self.state.lock().await;
            if state.scheduler.is_running() {
                info!("Manual round refused while auto mode is enabled");
                return Err(GameError::AutoModeActive);
            }
            let notification = self.begin_round(&mut state, RoundTrigger::Manual);
            (Self::active_view(&state)?, notification)
        };

        self.dispatch(&[notification]).await;
        Ok(view)
    }

    /// Clears the active round, if there is one, and returns it
    #[instrument(skip(self), fields(chat_id = %self.chat_id))]
    pub async fn stop_round(&self) -> Option<Round> {
        let stopped = {
            let mut state = self.state.lock().await;
            state.round.take()
        };

        match &stopped {
            Some(round) => {
                info!(round_id = %round.id(), "Round stopped");
                self.dispatch(&[Notification::RoundStopped {
                    native: round.entry().native.clone(),
                }])
                .await;
            }
            None => debug!("No round to stop"),
        }

        stopped
    }

    pub async fn stop_round_manual(&self) -> Result<Round, GameError> {
        self.stop_round().await.ok_or(GameError::NoActiveRound)
    }

    /// Turns on auto mode and starts a round right away
    #[instrument(skip(self), fields(chat_id = %self.chat_id))]
    pub async fn enable_auto(&self) -> Result<RoundView, GameError> {
        let (view, notification) = {
            let mut state = self.state.lock().await;
            let generation = state.scheduler.enable(self.clone(), self.round_interval)?;
            info!(
                generation,
                interval_secs = self.round_interval.as_secs(),
                "Auto mode enabled"
            );
            let notification = self.begin_round(&mut state, RoundTrigger::Scheduled);
            (Self::active_view(&state)?, notification)
        };

        self.dispatch(&[
            Notification::AutoModeEnabled {
                interval_secs: self.round_interval.as_secs(),
            },
            notification,
        ])
        .await;
        Ok(view)
    }

    /// Turns off auto mode. The current round, if any, keeps running.
    #[instrument(skip(self), fields(chat_id = %self.chat_id))]
    pub async fn disable_auto(&self) -> Result<(), GameError> {
        {
            let mut state = self.state.lock().await;
            let generation = state.scheduler.disable()?;
            info!(generation, "Auto mode disabled");
        }

        self.dispatch(&[Notification::AutoModeDisabled]).await;
        Ok(())
    }

    pub async fn is_auto_enabled(&self) -> bool {
        self.state.lock().await.scheduler.is_running()
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.state.lock().await.scores.leaderboard()
    }

    pub async fn points(&self, player_id: PlayerId) -> u32 {
        self.state.lock().await.scores.points(player_id)
    }

    /// Snapshot of the active round
    pub async fn current_round(&self) -> Option<Round> {
        self.state.lock().await.round.clone()
    }

    pub async fn current_round_view(&self) -> Option<RoundView> {
        self.state.lock().await.round.as_ref().map(Round::view)
    }

    /// Called by the auto round loop on every tick. Returns false once the
    /// loop that sent `generation` has been disabled, without touching the
    /// round.
    pub(crate) async fn start_scheduled_round(&self, generation: u64) -> bool {
        let notification = {
            let mut state = self.state.lock().await;
            if !state.scheduler.is_current(generation) {
                debug!(generation, "Ignoring tick from a disabled round loop");
                return false;
            }
            self.begin_round(&mut state, RoundTrigger::Scheduled)
        };

        self.dispatch(&[notification]).await;
        true
    }

    /// Replaces whatever round is active with a fresh one. Scores are untouched.
    fn begin_round(&self, state: &mut GameState, trigger: RoundTrigger) -> Notification {
        let round = Round::new(self.words.pick_random(), trigger);
        info!(
            round_id = %round.id(),
            native = %round.entry().native,
            trigger = ?trigger,
            "Starting new round"
        );

        let notification = Notification::RoundStarted {
            round_id: round.id(),
            native: round.entry().native.clone(),
            trigger,
        };

        if let Some(previous) = state.round.replace(round) {
            debug!(previous_round_id = %previous.id(), "Replaced previous round");
        }

        notification
    }

    fn active_view(state: &GameState) -> Result<RoundView, GameError> {
        state
            .round
            .as_ref()
            .map(Round::view)
            .ok_or(GameError::NoActiveRound)
    }

    async fn dispatch(&self, notifications: &[Notification]) {
        for notification in notifications {
            if let Err(e) = self.notifier.notify(self.chat_id, notification).await {
                warn!(
                    chat_id = %self.chat_id,
                    error = %e,
                    notification = ?notification,
                    "Failed to send notification"
                );
            }
        }
    }
}
