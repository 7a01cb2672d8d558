//! Application configuration model and its repository interface.

use crate::error::Result;
use crate::i18n::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_welcome_delay_ms() -> u64 {
    500
}

fn default_reply_delay_ms() -> u64 {
    1500
}

/// User-editable settings, stored as `config.toml`.
///
/// Every field has a default, so partial files are valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Language code selected at startup
    #[serde(default = "default_language")]
    pub language: String,
    /// Delay before the welcome message appears (milliseconds)
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,
    /// Simulated "typing" time before each reply (milliseconds)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            welcome_delay_ms: default_welcome_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Storage for [`AppConfig`].
pub trait ConfigRepository: Send + Sync {
    /// Loads the configuration, falling back to defaults when nothing is stored.
    fn load(&self) -> Result<AppConfig>;

    fn save(&self, config: &AppConfig) -> Result<()>;
}
