//! Telegram alert delivery.
//!
//! Alerts are rendered as HTML and sent with `sendMessage`. Delivery is
//! awaited, so a returned `Ok` means Telegram accepted the message.

mod format;

pub mod notifier;

pub use format::render_alert;
pub use notifier::{recent_chats, TelegramConfig, TelegramNotifier};
