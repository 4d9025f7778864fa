//! Collaborator calls degraded to "no data".
//!
//! Provider errors never escape a tick. Each helper logs the failure and
//! returns `None`, which callers treat as "skip this step".

use tracing::{debug, warn};

use crate::domain::{DecimalOdds, LiveMatch, MatchId, Side, StatSnapshot};
use crate::port::outbound::feed::LiveFeed;
use crate::port::outbound::odds::OddsSource;

/// Current statistics, or `None` when unavailable.
pub async fn statistics(feed: &dyn LiveFeed, id: MatchId) -> Option<StatSnapshot> {
    match feed.statistics(id).await {
        Ok(Some(snapshot)) => Some(snapshot),
        Ok(None) => {
            debug!(match_id = %id, "No statistics available");
            None
        }
        Err(e) => {
            warn!(match_id = %id, error = %e, "Statistics fetch failed");
            None
        }
    }
}

/// Market odds for the pairing, converted to decimal odds.
///
/// Missing markets, failed requests and non-positive prices all yield `None`.
pub async fn decimal_odds(source: &dyn OddsSource, live: &LiveMatch) -> Option<DecimalOdds> {
    let home = &live.players.home.name;
    let away = &live.players.away.name;
    let probabilities = match source.match_odds(home, away).await {
        Ok(Some(probabilities)) => probabilities,
        Ok(None) => {
            debug!(match_id = %live.id, "No odds market found");
            return None;
        }
        Err(e) => {
            warn!(match_id = %live.id, error = %e, "Odds lookup failed");
            return None;
        }
    };
    let odds = DecimalOdds::from_probabilities(probabilities);
    if odds.is_none() {
        warn!(
            match_id = %live.id,
            home = %probabilities.home,
            away = %probabilities.away,
            "Market prices are not usable probabilities"
        );
    }
    odds
}

/// Provider-reported first server of a set.
pub async fn first_server(feed: &dyn LiveFeed, id: MatchId, set: u8) -> Option<Side> {
    match feed.first_server(id, set).await {
        Ok(side) => side,
        Err(e) => {
            warn!(match_id = %id, set, error = %e, "First server lookup failed");
            None
        }
    }
}
