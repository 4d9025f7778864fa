//! Live-scores feed port.

use async_trait::async_trait;

use crate::domain::{LiveMatch, MatchId, Side, StatSnapshot};
use crate::error::Result;

/// Source of live tennis matches and their statistics.
#[async_trait]
pub trait LiveFeed: Send + Sync {
    /// Every match currently in progress.
    async fn live_matches(&self) -> Result<Vec<LiveMatch>>;

    /// Statistics for one match. `Ok(None)` when the provider has none yet.
    async fn statistics(&self, id: MatchId) -> Result<Option<StatSnapshot>>;

    /// Who served first in the given set, when the provider reports it.
    async fn first_server(&self, id: MatchId, set: u8) -> Result<Option<Side>>;
}
