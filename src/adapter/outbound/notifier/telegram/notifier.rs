//! Telegram notifier and credentials.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{error, info};

use crate::error::NotifyError;
use crate::port::outbound::notifier::{Alert, Notifier};

use super::format::render_alert;

/// Bot credentials.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts.
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or the chat id is not an integer.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.trim().parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Sends alerts to a single chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier ready");
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        let text = render_alert(alert);
        match self
            .bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => {
                info!(match_id = %alert.live.id, kind = %alert.kind(), "Telegram alert sent");
                Ok(())
            }
            Err(e) => {
                error!(match_id = %alert.live.id, kind = %alert.kind(), error = %e, "Failed to send Telegram message");
                Err(NotifyError::Rejected(e.to_string()))
            }
        }
    }
}

/// A chat that recently messaged the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentChat {
    pub id: i64,
    pub label: String,
}

/// Chats seen in the bot's pending updates, deduplicated, in arrival order.
pub async fn recent_chats(bot_token: &str) -> Result<Vec<RecentChat>, NotifyError> {
    let bot = Bot::new(bot_token);
    let updates = bot
        .get_updates()
        .await
        .map_err(|e| NotifyError::Rejected(e.to_string()))?;

    let mut chats: Vec<RecentChat> = Vec::new();
    for update in updates {
        let Some(chat) = update.chat() else {
            continue;
        };
        if chats.iter().any(|c| c.id == chat.id.0) {
            continue;
        }
        let label = chat
            .title()
            .map(str::to_string)
            .or_else(|| chat.username().map(|u| format!("@{u}")))
            .or_else(|| chat.first_name().map(str::to_string))
            .unwrap_or_else(|| "unnamed".to_string());
        chats.push(RecentChat {
            id: chat.id.0,
            label,
        });
    }
    Ok(chats)
}
