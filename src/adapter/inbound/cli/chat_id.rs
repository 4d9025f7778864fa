//! Handler for the `chat-id` command.

#[cfg(feature = "telegram")]
use super::output;

/// Print the chats that recently messaged the bot, so the operator can pick
/// a `TELEGRAM_CHAT_ID`.
#[cfg(feature = "telegram")]
pub async fn execute() -> anyhow::Result<()> {
    use anyhow::Context;

    use crate::adapter::outbound::notifier::telegram::recent_chats;

    let token = std::env::var("TELEGRAM_BOT_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
        .context("TELEGRAM_BOT_TOKEN is not set")?;
    let chats = recent_chats(&token)
        .await
        .context("failed to fetch bot updates")?;

    output::section("Recent Chats");
    if chats.is_empty() {
        output::warning("No updates found. Send the bot a message and run this again.");
        return Ok(());
    }
    for chat in chats {
        output::field(&chat.id.to_string(), chat.label);
    }
    Ok(())
}

/// Chat discovery needs the Telegram client.
#[cfg(not(feature = "telegram"))]
pub async fn execute() -> anyhow::Result<()> {
    anyhow::bail!("chat-id requires the telegram feature")
}
