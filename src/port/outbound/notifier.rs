//! Notifier port for match alerts.
//!
//! The application hands a fully resolved [`Alert`] to a [`Notifier`]; how it
//! is rendered and delivered is up to the adapter.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::{LiveMatch, Side, StatSnapshot, Verdict};
use crate::error::NotifyError;

/// The three alert kinds. Each fires at most once per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Match reached one set all.
    OneOne,
    /// The player down a set broke serve in the second set.
    Break,
    /// Deciding set reached 6-6.
    Tiebreak,
}

impl AlertKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneOne => "one_one",
            Self::Break => "break",
            Self::Tiebreak => "tiebreak",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific alert content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDetail {
    OneOne,
    Break { breaker: Side },
    Tiebreak,
}

impl AlertDetail {
    #[must_use]
    pub const fn kind(self) -> AlertKind {
        match self {
            Self::OneOne => AlertKind::OneOne,
            Self::Break { .. } => AlertKind::Break,
            Self::Tiebreak => AlertKind::Tiebreak,
        }
    }
}

/// Everything needed to render one alert.
#[derive(Debug, Clone)]
pub struct Alert {
    pub detail: AlertDetail,
    pub live: LiveMatch,
    pub stats: StatSnapshot,
    /// Side favoured by the comparison scorer.
    pub verdict: Verdict,
    pub starting_odds: String,
    pub live_odds: String,
    pub created_at: DateTime<Local>,
}

impl Alert {
    #[must_use]
    pub const fn kind(&self) -> AlertKind {
        self.detail.kind()
    }
}

/// Alert delivery.
///
/// `Ok(())` means the transport confirmed delivery. Any error leaves the
/// alert unsent so it can be retried on a later poll.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Notifier used when no transport is configured. Every delivery fails.
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        debug!(
            match_id = %alert.live.id,
            kind = %alert.kind(),
            "Notifier disabled, alert not delivered"
        );
        Err(NotifyError::NotConfigured)
    }
}
