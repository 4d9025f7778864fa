//! Send-once alert delivery.
//!
//! All three alert kinds share one flow: skip if already delivered, fetch
//! statistics (abort when unavailable), resolve odds, score the players,
//! deliver, and set the delivered flag only when the transport confirms.
//! A failed delivery leaves the flag clear so the next qualifying tick
//! retries.

use chrono::Local;
use tracing::{debug, info, warn};

use super::lookup;
use super::pipeline::Services;
use super::tracker::MatchTracker;
use crate::domain::breaks::{self, ConvertedCounts};
use crate::domain::comparison::compare;
use crate::domain::odds::UNAVAILABLE;
use crate::domain::{DecimalOdds, GameScore, LiveMatch, MatchId, SetScore, StatSnapshot};
use crate::port::outbound::notifier::{Alert, AlertDetail, AlertKind};

/// Starting and live odds labels for an alert.
///
/// When live odds cannot be resolved both labels are unavailable, even if
/// starting odds were cached earlier.
#[must_use]
pub fn odds_labels(
    tracker: &MatchTracker,
    id: MatchId,
    live: Option<DecimalOdds>,
) -> (String, String) {
    match live {
        Some(live) => {
            let starting = tracker.starting_odds(id).unwrap_or(live);
            (starting.to_string(), live.to_string())
        }
        None => (UNAVAILABLE.to_string(), UNAVAILABLE.to_string()),
    }
}

/// Alert for a match that just reached one set all.
pub async fn one_one(services: &Services, tracker: &mut MatchTracker, live: &LiveMatch) -> bool {
    if tracker.is_sent(live.id, AlertKind::OneOne) {
        return false;
    }
    let Some(stats) = lookup::statistics(services.feed.as_ref(), live.id).await else {
        return false;
    };
    deliver(services, tracker, live, AlertDetail::OneOne, stats).await
}

/// Alert for a deciding-set tiebreak.
pub async fn tiebreak(services: &Services, tracker: &mut MatchTracker, live: &LiveMatch) -> bool {
    if tracker.is_sent(live.id, AlertKind::Tiebreak) {
        return false;
    }
    let Some(stats) = lookup::statistics(services.feed.as_ref(), live.id).await else {
        return false;
    };
    deliver(services, tracker, live, AlertDetail::Tiebreak, stats).await
}

/// Alert for a second-set break by the player down a set.
///
/// Every statistics fetch refreshes the stored converted counters, whether or
/// not a break is found.
pub async fn serve_break(
    services: &Services,
    tracker: &mut MatchTracker,
    live: &LiveMatch,
    sets: SetScore,
    set_games: GameScore,
) -> bool {
    if tracker.is_sent(live.id, AlertKind::Break) {
        return false;
    }
    let Some(stats) = lookup::statistics(services.feed.as_ref(), live.id).await else {
        return false;
    };

    let current = ConvertedCounts::new(stats.home.bp_converted, stats.away.bp_converted);
    let previous = tracker.previous_converted(live.id);
    let breaker = breaks::detect_from_stats(current, previous, sets);
    tracker.update_converted(live.id, current);

    let Some(breaker) = breaker else {
        return false;
    };
    if !breaks::is_alert_worthy(breaker, sets, set_games) {
        debug!(
            match_id = %live.id,
            breaker = %breaker,
            games = %set_games,
            "Break does not level the set"
        );
        return false;
    }

    info!(
        match_id = %live.id,
        breaker = %live.players.get(breaker).name,
        converted_home = current.home,
        converted_away = current.away,
        "Break detected in 2nd set"
    );
    deliver(services, tracker, live, AlertDetail::Break { breaker }, stats).await
}

async fn deliver(
    services: &Services,
    tracker: &mut MatchTracker,
    live: &LiveMatch,
    detail: AlertDetail,
    stats: StatSnapshot,
) -> bool {
    let live_odds = lookup::decimal_odds(services.odds.as_ref(), live).await;
    let (starting_odds, live_odds) = odds_labels(tracker, live.id, live_odds);

    let alert = Alert {
        detail,
        live: live.clone(),
        verdict: compare(&stats),
        stats,
        starting_odds,
        live_odds,
        created_at: Local::now(),
    };

    match services.notifier.send(&alert).await {
        Ok(()) => {
            tracker.mark_sent(live.id, alert.kind(), alert.created_at);
            info!(match_id = %live.id, kind = %alert.kind(), match_title = %live.title(), "Alert sent");
            true
        }
        Err(e) => {
            warn!(match_id = %live.id, kind = %alert.kind(), error = %e, "Alert not delivered");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn labels_fall_back_to_live_odds_when_nothing_cached() {
        let tracker = MatchTracker::new();
        let live = DecimalOdds {
            home: dec!(2.5),
            away: dec!(2),
        };
        let labels = odds_labels(&tracker, MatchId::new(1), Some(live));
        assert_eq!(labels, ("2.50/2.00".to_string(), "2.50/2.00".to_string()));
    }

    #[test]
    fn labels_use_cached_starting_odds() {
        let id = MatchId::new(1);
        let mut tracker = MatchTracker::new();
        tracker.record_starting_odds(
            id,
            DecimalOdds {
                home: dec!(1.25),
                away: dec!(5),
            },
        );
        let live = DecimalOdds {
            home: dec!(2.5),
            away: dec!(2),
        };
        let (starting, current) = odds_labels(&tracker, id, Some(live));
        assert_eq!(starting, "1.25/5.00");
        assert_eq!(current, "2.50/2.00");
    }

    #[test]
    fn missing_live_odds_hide_starting_odds_too() {
        let id = MatchId::new(1);
        let mut tracker = MatchTracker::new();
        tracker.record_starting_odds(
            id,
            DecimalOdds {
                home: dec!(1.25),
                away: dec!(5),
            },
        );
        assert_eq!(
            odds_labels(&tracker, id, None),
            ("N/A".to_string(), "N/A".to_string())
        );
    }
}
