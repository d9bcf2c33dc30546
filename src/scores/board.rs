use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::PlayerId;

/// Name reported for a player who scored but whose name was never seen
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub display_name: String,
    pub points: u32,
}

#[derive(Debug, Clone, Copy)]
struct ScoreEntry {
    points: u32,
    /// Position in the order players first scored, used to break ties
    first_scored: u64,
}

/// Cumulative points per player for the lifetime of the process.
///
/// Points only ever go up. Display names are tracked separately because they
/// are refreshed on every message, while score entries only appear once a
/// player actually earns something.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    display_names: HashMap<PlayerId, String>,
    scores: HashMap<PlayerId, ScoreEntry>,
    next_sequence: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent name wins
    pub fn record_name(&mut self, player_id: PlayerId, display_name: &str) {
        self.display_names
            .insert(player_id, display_name.to_string());
    }

    pub fn display_name(&self, player_id: PlayerId) -> &str {
        self.display_names
            .get(&player_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PLAYER_NAME)
    }

    /// Adds points and returns the new total
    pub fn award(&mut self, player_id: PlayerId, points: u32) -> u32 {
        let next_sequence = &mut self.next_sequence;
        let entry = self.scores.entry(player_id).or_insert_with(|| {
            let first_scored = *next_sequence;
            *next_sequence += 1;
            ScoreEntry {
                points: 0,
                first_scored,
            }
        });
        entry.points = entry.points.saturating_add(points);
        entry.points
    }

    pub fn points(&self, player_id: PlayerId) -> u32 {
        self.scores
            .get(&player_id)
            .map(|entry| entry.points)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Full snapshot sorted by points descending, ties by who scored first
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<(&PlayerId, &ScoreEntry)> = self.scores.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.points
                .cmp(&a.points)
                .then(a.first_scored.cmp(&b.first_scored))
        });

        ranked
            .into_iter()
            .map(|(player_id, entry)| LeaderboardEntry {
                player_id: *player_id,
                display_name: self.display_name(*player_id).to_string(),
                points: entry.points,
            })
            .collect()
    }
}
