use thiserror::Error;

/// Precondition violations. None of these change any state; callers turn them
/// into an informational reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Auto mode is enabled. Disable it with /stop to start a round manually.")]
    AutoModeActive,

    #[error("Auto mode is already enabled.")]
    AutoModeAlreadyEnabled,

    #[error("Auto mode is not enabled.")]
    AutoModeNotEnabled,

    #[error("There is no active round right now.")]
    NoActiveRound,

    #[error("Only chat administrators can do that.")]
    NotElevated,
}
