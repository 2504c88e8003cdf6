// Bot configuration, read from the environment (and `.env` via dotenv).
//
// Parsing goes through a lookup closure so tests never touch the real
// process environment.

use crate::core::ai::DEFAULT_AI_TIMEOUT;
use crate::core::dispatch::DispatchSettings;
use crate::infra::ai::DEFAULT_COMPLETION_URL;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_BAN_PURGE_DAYS: u8 = 1;
// Discord refuses to purge more than a week of history on ban.
const MAX_BAN_PURGE_DAYS: u8 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable! Create a .env file with your bot token.")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub command_prefix: String,
    pub ai_endpoint: String,
    pub ai_timeout: Duration,
    pub ban_purge_days: u8,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN")
            .map(|token| token.trim().to_string())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let command_prefix = match lookup("COMMAND_PREFIX") {
            None => DEFAULT_PREFIX.to_string(),
            Some(prefix) if prefix.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    key: "COMMAND_PREFIX",
                    reason: "prefix must not be blank".to_string(),
                })
            }
            Some(prefix) => prefix,
        };

        let ai_endpoint = get("AI_ENDPOINT_URL")
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string());

        let ai_timeout = match get("AI_TIMEOUT_SECS") {
            None => DEFAULT_AI_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "AI_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got {:?}", raw),
                    })
                }
            },
        };

        let ban_purge_days = match get("BAN_PURGE_DAYS") {
            None => DEFAULT_BAN_PURGE_DAYS,
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(days) if days <= MAX_BAN_PURGE_DAYS => days,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BAN_PURGE_DAYS",
                        reason: format!("expected 0-{}, got {:?}", MAX_BAN_PURGE_DAYS, raw),
                    })
                }
            },
        };

        Ok(Self {
            discord_token,
            command_prefix,
            ai_endpoint,
            ai_timeout,
            ban_purge_days,
        })
    }

    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            command_prefix: self.command_prefix.clone(),
            ban_purge_days: self.ban_purge_days,
        }
    }
}
