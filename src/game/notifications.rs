use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::round::RoundTrigger;
use crate::scores::LeaderboardEntry;

pub const RULES_TEXT: &str = "\
Game rules

Every round shows one word in Russian. Do something with it in German to earn points:
1. Translate it: the first correct translation earns +1.
2. Explain it, starting your message with `Erklärung:`. Sharing at least 3 words with the reference description earns +1 (once per round).
3. Write a sentence with it, starting with `Satz:`, for +2.
4. Use the word 4 times out loud and 4 times in writing, then send `Aufgabe+` with the word for +4.

Commands: /rules shows this message, /score shows the leaderboard.

Viel Erfolg!";

/// Everything the game says in the chat.
///
/// Transports either forward the serialized form or the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notification {
    RoundStarted {
        round_id: Uuid,
        native: String,
        trigger: RoundTrigger,
    },
    RoundStopped {
        native: String,
    },
    TranslationWon {
        player_name: String,
        native: String,
        target: String,
        points: u32,
    },
    TooLate {
        player_name: String,
        winner_name: String,
    },
    Explained {
        player_name: String,
        points: u32,
    },
    SentenceMade {
        player_name: String,
        target: String,
        points: u32,
    },
    TaskDone {
        player_name: String,
        points: u32,
    },
    AutoModeEnabled {
        interval_secs: u64,
    },
    AutoModeDisabled,
    Leaderboard {
        entries: Vec<LeaderboardEntry>,
    },
    Rules,
    Info {
        message: String,
    },
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification::Info {
            message: message.into(),
        }
    }

    /// Plain-text rendering for chat transports
    pub fn render(&self) -> String {
        match self {
            Notification::RoundStarted {
                native, trigger, ..
            } => {
                let prefix = match trigger {
                    RoundTrigger::Scheduled => "Automatic round!\n",
                    RoundTrigger::Manual => "",
                };
                format!(
                    "{prefix}NEW WORD: {native}\n\nTranslate it, explain it or use it in a sentence! Send /rules to see how points are earned."
                )
            }
            Notification::RoundStopped { native } => {
                format!("The round with the word \"{native}\" has been stopped.")
            }
            Notification::TranslationWon {
                player_name,
                native,
                target,
                points,
            } => format!(
                "{player_name} was the first to translate \"{native}\" as \"{target}\"! +{points} {}",
                point_word(*points)
            ),
            Notification::TooLate {
                winner_name, ..
            } => format!("Zu spät! {winner_name} already translated the word."),
            Notification::Explained {
                player_name,
                points,
            } => format!(
                "{player_name} gave a good explanation! +{points} {}",
                point_word(*points)
            ),
            Notification::SentenceMade {
                player_name,
                target,
                points,
            } => format!(
                "{player_name} made a sentence (Satz) with \"{target}\"! +{points} {}",
                point_word(*points)
            ),
            Notification::TaskDone {
                player_name,
                points,
            } => format!(
                "{player_name} completed Aufgabe+! +{points} {}",
                point_word(*points)
            ),
            Notification::AutoModeEnabled { interval_secs } => format!(
                "Auto mode enabled! A new word will appear every {}.",
                describe_interval(*interval_secs)
            ),
            Notification::AutoModeDisabled => "Auto mode stopped.".to_string(),
            Notification::Leaderboard { entries } if entries.is_empty() => {
                "Nobody has scored yet.".to_string()
            }
            Notification::Leaderboard { entries } => {
                let mut text = String::from("Leaderboard:\n");
                for entry in entries {
                    text.push_str(&format!(
                        "\n• {}: {} {}",
                        entry.display_name,
                        entry.points,
                        point_word(entry.points)
                    ));
                }
                text
            }
            Notification::Rules => RULES_TEXT.to_string(),
            Notification::Info { message } => message.clone(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn point_word(points: u32) -> &'static str {
    if points == 1 {
        "point"
    } else {
        "points"
    }
}

fn describe_interval(secs: u64) -> String {
    match secs {
        s if s >= 3600 && s % 3600 == 0 => match s / 3600 {
            1 => "hour".to_string(),
            hours => format!("{hours} hours"),
        },
        s if s >= 60 && s % 60 == 0 => match s / 60 {
            1 => "minute".to_string(),
            minutes => format!("{minutes} minutes"),
        },
        1 => "second".to_string(),
        s => format!("{s} seconds"),
    }
}
