//! Odds-market port.

use async_trait::async_trait;

use crate::domain::Probabilities;
use crate::error::Result;

/// Market-implied win probabilities for a pairing.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Probabilities for `home` and `away`, in that order.
    ///
    /// `Ok(None)` when no usable market exists. Partial results are never
    /// returned.
    async fn match_odds(&self, home: &str, away: &str) -> Result<Option<Probabilities>>;
}
