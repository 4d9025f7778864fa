//! Notification adapters.
//!
//! Implements the `port::outbound::notifier::Notifier` trait for alert transports.

#[cfg(feature = "telegram")]
pub mod telegram;
