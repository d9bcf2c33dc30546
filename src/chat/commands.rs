use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Slash commands understood in the game chat
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Start a round by hand
    Play,
    /// Enable auto mode
    Auto,
    /// Disable auto mode
    Stop,
    /// Stop the current round
    StopRound,
    /// Show the leaderboard
    Score,
    /// Show the rules
    Rules,
}

impl Command {
    /// Parses `/name`, `/name@botname` or `/name with arguments`.
    /// Anything else, including unknown commands, is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let first_word = text.split_whitespace().next()?;
        let name = first_word.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        Command::from_str(&name.to_lowercase()).ok()
    }

    pub fn requires_elevation(&self) -> bool {
        matches!(self, Command::Auto | Command::Stop)
    }
}
