// Chat-facing side of the game: the inbound gateway, command parsing, and the
// seams to the transport (notifications out, admin checks in).

// Public API
pub use commands::Command;
pub use gateway::{ChatGateway, GatewayOutcome, InboundEvent};
pub use notifier::{BroadcastNotifier, Notifier, NotifyError, OutboundMessage};
pub use privileges::{PrivilegeCheck, StaticAdminList};

// Internal modules
mod commands;
mod gateway;
mod notifier;
mod privileges;
