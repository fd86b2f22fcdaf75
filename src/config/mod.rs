//! Configuration handling for the bot.
//!
//! Everything comes from process environment variables at startup. The
//! Discord token is the only real secret; the restricted channel id has a
//! compiled-in default so a plain `DISCORD_TOKEN=... cargo run` works.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests and deployment scripts can
/// refer to them.
pub const ENV_DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const ENV_TN_CHANNEL_ID: &str = "TN_CHANNEL_ID";

/// Channel the `/tn` command answers in when `TN_CHANNEL_ID` is not set.
const DEFAULT_TN_CHANNEL_ID: u64 = 1292201035301126275;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    discord_token: String,
    tn_channel_id: u64,
}

impl Config {
    /// Create a config explicitly (tests, embedding).
    pub fn new(discord_token: impl Into<String>, tn_channel_id: u64) -> Self {
        Self {
            discord_token: discord_token.into(),
            tn_channel_id,
        }
    }

    /// Load from environment variables. A missing token is a startup
    /// error; a malformed channel id fails rather than silently falling
    /// back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token = env::var(ENV_DISCORD_TOKEN).map_err(|_| ConfigError::Missing {
            field: ENV_DISCORD_TOKEN,
        })?;

        let tn_channel_id = match env::var(ENV_TN_CHANNEL_ID) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_TN_CHANNEL_ID,
                reason: format!("expected a numeric channel id, got '{raw}'"),
            })?,
            Err(_) => DEFAULT_TN_CHANNEL_ID,
        };

        Ok(Self {
            discord_token,
            tn_channel_id,
        })
    }

    /// Gateway session credential.
    pub fn discord_token(&self) -> &str {
        &self.discord_token
    }

    /// Channel the `/tn` command is restricted to.
    pub fn tn_channel_id(&self) -> u64 {
        self.tn_channel_id
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    Missing { field: &'static str },
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing { field } => {
                write!(f, "missing required environment variable '{}'", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
