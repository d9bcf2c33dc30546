// Library crate for the vocabulary game server
// This file exposes the public API for integration tests

pub mod chat;
pub mod config;
pub mod game;
pub mod http;
pub mod round;
pub mod scores;
pub mod shared;
pub mod words;

// Re-export commonly used types for easier access in tests
pub use chat::{ChatGateway, GatewayOutcome, InboundEvent, Notifier};
pub use game::{GameController, GameError, Notification};
pub use round::{ScoringEvent, TranslationState};
pub use scores::LeaderboardEntry;
pub use shared::{AppError, ChatId, PlayerId};
pub use words::{VocabEntry, WordBank};
