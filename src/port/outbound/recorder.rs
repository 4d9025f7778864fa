//! Durable match log port.

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::{LiveMatch, StatSnapshot};
use crate::error::Result;

/// One qualifying observation.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub recorded_at: DateTime<Local>,
    pub live: LiveMatch,
    pub stats: StatSnapshot,
    pub starting_odds: String,
    pub live_odds: String,
}

/// Append-only log of qualifying matches.
#[async_trait]
pub trait MatchRecorder: Send + Sync {
    async fn record(&self, record: &MatchRecord) -> Result<()>;
}
