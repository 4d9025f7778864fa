//! Component factory functions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::infrastructure::config::telegram::TelegramAppConfig;
use crate::port::outbound::notifier::{DisabledNotifier, Notifier};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};

/// Build the alert notifier.
///
/// Falls back to [`DisabledNotifier`] when Telegram is disabled in the
/// config or its environment credentials are missing.
#[cfg(feature = "telegram")]
pub fn build_notifier(config: &TelegramAppConfig) -> Arc<dyn Notifier> {
    if !config.enabled {
        info!("Telegram disabled, alerts will not be delivered");
        return Arc::new(DisabledNotifier);
    }
    match TelegramConfig::from_env() {
        Some(credentials) => Arc::new(TelegramNotifier::new(&credentials)),
        None => {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
            Arc::new(DisabledNotifier)
        }
    }
}

/// Build the alert notifier (non-Telegram variant).
#[cfg(not(feature = "telegram"))]
pub fn build_notifier(config: &TelegramAppConfig) -> Arc<dyn Notifier> {
    if config.enabled {
        warn!("Telegram enabled but the binary was built without the telegram feature");
    } else {
        info!("Telegram disabled, alerts will not be delivered");
    }
    Arc::new(DisabledNotifier)
}
