// Public API
pub use controller::{GameController, DEFAULT_ROUND_INTERVAL};
pub use errors::GameError;
pub use notifications::{Notification, RULES_TEXT};

// Internal modules
mod controller;
mod errors;
mod notifications;
mod scheduler;
