use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::game::DEFAULT_ROUND_INTERVAL;
use crate::shared::{ChatId, PlayerId};

pub const CHAT_ID_VAR: &str = "GAME_CHAT_ID";
pub const ADMIN_IDS_VAR: &str = "GAME_ADMIN_IDS";
pub const ROUND_INTERVAL_VAR: &str = "GAME_ROUND_INTERVAL_SECS";
pub const BIND_ADDR_VAR: &str = "GAME_BIND_ADDR";
pub const WORDS_FILE_VAR: &str = "GAME_WORDS_FILE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Startup configuration, read from environment variables
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The one chat the game runs in
    pub chat_id: ChatId,
    pub admin_ids: Vec<PlayerId>,
    pub round_interval: Duration,
    pub bind_addr: SocketAddr,
    /// Replacement word catalog; the embedded one is used when unset
    pub words_file: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let chat_id = read(CHAT_ID_VAR)
            .ok_or(ConfigError::Missing(CHAT_ID_VAR))
            .and_then(|value| parse(CHAT_ID_VAR, &value))
            .map(ChatId)?;

        let admin_ids = match read(ADMIN_IDS_VAR) {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| parse(ADMIN_IDS_VAR, id).map(PlayerId))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let round_interval = match read(ROUND_INTERVAL_VAR) {
            Some(value) => {
                let secs: u64 = parse(ROUND_INTERVAL_VAR, &value)?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: ROUND_INTERVAL_VAR,
                        value,
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_ROUND_INTERVAL,
        };

        let bind_addr = parse(
            BIND_ADDR_VAR,
            &read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let words_file = read(WORDS_FILE_VAR).map(PathBuf::from);

        Ok(Self {
            chat_id,
            admin_ids,
            round_interval,
            bind_addr,
            words_file,
        })
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
