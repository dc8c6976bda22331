//! Environment-backed configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Configurable reset timezone
//! - 1.0.0: Bot token from environment or `.env`

use anyhow::{anyhow, Result};

/// Timezone the daily reset is anchored to when `RESET_TIMEZONE` is unset.
pub const DEFAULT_RESET_TIMEZONE: &str = "Europe/Moscow";

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub reset_timezone: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Callers are expected to have run `dotenvy::dotenv()` first so that a
    /// `.env` file in the working directory is visible here.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .or_else(|| lookup("TOKEN"))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN must be set (environment or .env file)"))?;

        let reset_timezone = lookup("RESET_TIMEZONE")
            .map(|tz| tz.trim().to_string())
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| DEFAULT_RESET_TIMEZONE.to_string());

        Ok(Config {
            discord_token,
            reset_timezone,
        })
    }

    /// Token in the `Bot <token>` form the HTTP API expects.
    pub fn bot_token(&self) -> String {
        if self.discord_token.starts_with("Bot ") {
            self.discord_token.clone()
        } else {
            format!("Bot {}", self.discord_token)
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("reset_timezone", &self.reset_timezone)
            .finish()
    }
}
