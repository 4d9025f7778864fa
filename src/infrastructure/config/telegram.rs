//! Telegram toggle. Credentials are read from the environment only.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// `[telegram]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Deliver alerts when credentials are present.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
