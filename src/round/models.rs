// A round is one vocabulary challenge. It is created whole by the controller
// and replaced or cleared whole, so callers only ever see a complete round or
// no round at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::shared::PlayerId;
use crate::words::VocabEntry;

/// What started a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundTrigger {
    Manual,
    Scheduled,
}

/// Whether someone has already translated the word. The winner only exists
/// once the translation is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Open,
    Settled { winner: PlayerId },
}

#[derive(Debug, Clone)]
pub struct Round {
    id: Uuid,
    entry: VocabEntry,
    trigger: RoundTrigger,
    started_at: DateTime<Utc>,
    translation: TranslationState,
    explained_by: HashSet<PlayerId>,
}

impl Round {
    pub fn new(entry: VocabEntry, trigger: RoundTrigger) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry,
            trigger,
            started_at: Utc::now(),
            translation: TranslationState::Open,
            explained_by: HashSet::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entry(&self) -> &VocabEntry {
        &self.entry
    }

    pub fn trigger(&self) -> RoundTrigger {
        self.trigger
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn translation(&self) -> TranslationState {
        self.translation
    }

    pub fn translation_settled(&self) -> bool {
        matches!(self.translation, TranslationState::Settled { .. })
    }

    pub fn translation_winner(&self) -> Option<PlayerId> {
        match self.translation {
            TranslationState::Open => None,
            TranslationState::Settled { winner } => Some(winner),
        }
    }

    /// Settles the translation for `winner`. Returns false if it was already
    /// settled, in which case nothing changes.
    pub fn settle_translation(&mut self, winner: PlayerId) -> bool {
        if self.translation_settled() {
            return false;
        }
        self.translation = TranslationState::Settled { winner };
        true
    }

    pub fn has_explained(&self, player_id: PlayerId) -> bool {
        self.explained_by.contains(&player_id)
    }

    /// Returns false if the player already had the explanation bonus
    pub fn record_explanation(&mut self, player_id: PlayerId) -> bool {
        self.explained_by.insert(player_id)
    }

    pub fn explained_by(&self) -> &HashSet<PlayerId> {
        &self.explained_by
    }

    pub fn view(&self) -> RoundView {
        let mut explained_by: Vec<PlayerId> = self.explained_by.iter().copied().collect();
        explained_by.sort();

        RoundView {
            id: self.id,
            native: self.entry.native.clone(),
            trigger: self.trigger,
            started_at: self.started_at,
            translation_settled: self.translation_settled(),
            translation_winner: self.translation_winner(),
            explained_by,
        }
    }
}

/// Public view of a round. Leaves out the target term and the description so
/// it can be shown to players while the round is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub id: Uuid,
    pub native: String,
    pub trigger: RoundTrigger,
    pub started_at: DateTime<Utc>,
    pub translation_settled: bool,
    pub translation_winner: Option<PlayerId>,
    pub explained_by: Vec<PlayerId>,
}
