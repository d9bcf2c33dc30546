//! Decides which scoring rule, if any, an utterance triggers.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. no active round: nothing
//! 2. the text contains the target term: first correct translation scores,
//!    later ones from other players are "too late"
//! 3. `Erklärung:` explanations sharing enough words with the description
//! 4. `Satz:` sentences using the term
//! 5. `Aufgabe+` task completions mentioning the term
//!
//! Once the translation is settled, anyone but the winner who mentions the
//! term is too late, markers or not. Only the winner's marker texts go on to
//! rules 3 to 5.
//!
//! Classification never mutates anything; the controller applies the result
//! under its lock.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::models::{Round, TranslationState};
use crate::shared::PlayerId;

pub const EXPLANATION_MARKER: &str = "erklärung:";
pub const SENTENCE_MARKER: &str = "satz:";
pub const TASK_MARKER: &str = "aufgabe+";

/// Distinct words an explanation must share with the description
pub const EXPLANATION_MIN_OVERLAP: usize = 3;

pub const TRANSLATION_POINTS: u32 = 1;
pub const EXPLANATION_POINTS: u32 = 1;
pub const SENTENCE_POINTS: u32 = 2;
pub const TASK_POINTS: u32 = 4;

fn word_regex() -> &'static Regex {
    static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\w+").unwrap()
    });
    &WORD_REGEX
}

/// One chat message attributed to a player
#[derive(Debug, Clone, Copy)]
pub struct Utterance<'a> {
    pub player_id: PlayerId,
    pub text: &'a str,
}

impl<'a> Utterance<'a> {
    pub fn new(player_id: PlayerId, text: &'a str) -> Self {
        Self { player_id, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringEvent {
    Translated { player_id: PlayerId, points: u32 },
    TooLate { player_id: PlayerId, winner: PlayerId },
    Explained { player_id: PlayerId, points: u32 },
    SentenceMade { player_id: PlayerId, points: u32 },
    TaskDone { player_id: PlayerId, points: u32 },
}

impl ScoringEvent {
    pub fn player_id(&self) -> PlayerId {
        match self {
            ScoringEvent::Translated { player_id, .. }
            | ScoringEvent::TooLate { player_id, .. }
            | ScoringEvent::Explained { player_id, .. }
            | ScoringEvent::SentenceMade { player_id, .. }
            | ScoringEvent::TaskDone { player_id, .. } => *player_id,
        }
    }

    /// Points awarded; zero for informational events
    pub fn points(&self) -> u32 {
        match self {
            ScoringEvent::TooLate { .. } => 0,
            ScoringEvent::Translated { points, .. }
            | ScoringEvent::Explained { points, .. }
            | ScoringEvent::SentenceMade { points, .. }
            | ScoringEvent::TaskDone { points, .. } => *points,
        }
    }
}

/// Lowercase set of the words in `text`
pub fn tokenize(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    word_regex()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Classifies an utterance against the current round. `None` means no rule
/// applies and nothing should be said in the chat.
pub fn classify(round: Option<&Round>, utterance: &Utterance<'_>) -> Option<ScoringEvent> {
    let round = round?;
    let player_id = utterance.player_id;
    let text = utterance.text.trim().to_lowercase();
    let target = round.entry().target.to_lowercase();
    let mentions_target = text.contains(&target);
    let has_marker = [EXPLANATION_MARKER, SENTENCE_MARKER, TASK_MARKER]
        .iter()
        .any(|marker| text.starts_with(marker));

    if mentions_target {
        match round.translation() {
            TranslationState::Open => {
                return Some(ScoringEvent::Translated {
                    player_id,
                    points: TRANSLATION_POINTS,
                });
            }
            TranslationState::Settled { winner } if winner != player_id => {
                return Some(ScoringEvent::TooLate { player_id, winner });
            }
            TranslationState::Settled { .. } if has_marker => {}
            TranslationState::Settled { .. } => return None,
        }
    }

    if let Some(explanation) = text.strip_prefix(EXPLANATION_MARKER) {
        if round.has_explained(player_id) {
            return None;
        }
        return explanation_matches(explanation, &round.entry().description).then_some(
            ScoringEvent::Explained {
                player_id,
                points: EXPLANATION_POINTS,
            },
        );
    }

    if text.starts_with(SENTENCE_MARKER) {
        return mentions_target.then_some(ScoringEvent::SentenceMade {
            player_id,
            points: SENTENCE_POINTS,
        });
    }

    if text.starts_with(TASK_MARKER) {
        return mentions_target.then_some(ScoringEvent::TaskDone {
            player_id,
            points: TASK_POINTS,
        });
    }

    None
}

fn explanation_matches(explanation: &str, description: &str) -> bool {
    let offered = tokenize(explanation);
    let expected = tokenize(description);
    offered.intersection(&expected).count() >= EXPLANATION_MIN_OVERLAP
}
