// Public API
pub use board::{LeaderboardEntry, ScoreBoard, UNKNOWN_PLAYER_NAME};

// Internal modules
mod board;
