//! Per-match decision pipeline, run once per live match per tick.
//!
//! Order of work for an allowed match:
//!
//! 1. cache starting odds until a first value resolves
//! 2. one set all: 1-1 alert
//! 3. third set at one set all and 6-6: tiebreak alert
//! 4. second set: break alert, then refresh second-set game tracking
//! 5. independently, log a CSV row when the match qualifies
//!
//! Steps 2 to 5 need both set counts; a match missing either only caches odds.
//! Steps 2 to 4 are send-once through [`MatchTracker`]. Step 5 is stateless
//! and logs on every qualifying tick unless row de-duplication is on.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use super::alert;
use super::lookup;
use super::tracker::{GameTrackingState, MatchTracker};
use crate::domain::breaks;
use crate::domain::odds::odds_label;
use crate::domain::qualify::qualifies_for_log;
use crate::domain::tiebreak::is_third_set_tiebreak;
use crate::domain::{ActiveSet, GameScore, LiveMatch, SetScore, TournamentFilter};
use crate::error::Result;
use crate::port::outbound::feed::LiveFeed;
use crate::port::outbound::notifier::{AlertKind, Notifier};
use crate::port::outbound::odds::OddsSource;
use crate::port::outbound::recorder::{MatchRecord, MatchRecorder};

/// External collaborators used while processing a match.
#[derive(Clone)]
pub struct Services {
    pub feed: Arc<dyn LiveFeed>,
    pub odds: Arc<dyn OddsSource>,
    pub notifier: Arc<dyn Notifier>,
    pub recorder: Arc<dyn MatchRecorder>,
}

/// What processing one match produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The tournament is not on the allow-list; nothing else ran.
    pub skipped: bool,
    /// The match met the logging criterion this tick.
    pub qualified: bool,
    /// A row was written.
    pub logged: bool,
    pub alerts_sent: Vec<AlertKind>,
}

pub struct MatchPipeline {
    services: Services,
    filter: TournamentFilter,
    dedupe_rows: bool,
}

impl MatchPipeline {
    #[must_use]
    pub const fn new(services: Services, filter: TournamentFilter, dedupe_rows: bool) -> Self {
        Self {
            services,
            filter,
            dedupe_rows,
        }
    }

    #[must_use]
    pub const fn services(&self) -> &Services {
        &self.services
    }

    /// Process one live match.
    ///
    /// # Errors
    ///
    /// Only a failed log write is returned. Provider failures degrade to
    /// skipped steps.
    pub async fn process(
        &self,
        tracker: &mut MatchTracker,
        live: &LiveMatch,
    ) -> Result<MatchOutcome> {
        if !self.filter.is_allowed(live.category) {
            debug!(match_id = %live.id, category = %live.category, "Tournament not allowed");
            return Ok(MatchOutcome {
                skipped: true,
                ..MatchOutcome::default()
            });
        }

        let current = live.current_games();
        info!(
            match_id = %live.id,
            match_title = %live.title(),
            category = %live.category,
            sets = %live.sets_label(),
            games = %current.unwrap_or_default(),
            status = %live.status,
            "Match"
        );

        let mut outcome = MatchOutcome::default();
        self.cache_starting_odds(tracker, live).await;

        let Some(sets) = live.sets else {
            debug!(match_id = %live.id, "Set score incomplete, set checks skipped");
            return Ok(outcome);
        };

        let active = live.active_set();
        if sets.is_one_all() && alert::one_one(&self.services, tracker, live).await {
            outcome.alerts_sent.push(AlertKind::OneOne);
        }

        if active == ActiveSet::Third && sets.is_one_all() {
            if let Some(third) = live.set_games(3) {
                if is_third_set_tiebreak(sets, active, Some(third))
                    && alert::tiebreak(&self.services, tracker, live).await
                {
                    outcome.alerts_sent.push(AlertKind::Tiebreak);
                }
            }
        }

        if active == ActiveSet::Second {
            if let Some(second) = live.set_games(2) {
                if alert::serve_break(&self.services, tracker, live, sets, second).await {
                    outcome.alerts_sent.push(AlertKind::Break);
                }
                self.refresh_game_state(tracker, live, sets, second).await;
            }
        }

        if qualifies_for_log(sets, &live.status, live.set_games(3)) {
            outcome.qualified = true;
            outcome.logged = self.log_match(tracker, live).await?;
        }

        Ok(outcome)
    }

    async fn cache_starting_odds(&self, tracker: &mut MatchTracker, live: &LiveMatch) {
        if tracker.starting_odds(live.id).is_some() {
            return;
        }
        if let Some(odds) = lookup::decimal_odds(self.services.odds.as_ref(), live).await {
            tracker.record_starting_odds(live.id, odds);
            debug!(match_id = %live.id, odds = %odds, "Starting odds cached");
        }
    }

    /// Update second-set game tracking, running the game-score break detector
    /// against the previous snapshot first.
    async fn refresh_game_state(
        &self,
        tracker: &mut MatchTracker,
        live: &LiveMatch,
        sets: SetScore,
        second: GameScore,
    ) {
        let previous = tracker.game_state(live.id).unwrap_or_default();

        let legacy = breaks::detect_from_games(
            second,
            previous.prev_set2,
            previous.first_server,
            sets,
        );
        debug!(
            match_id = %live.id,
            games = %second,
            first_server = ?previous.first_server,
            breaker = ?legacy,
            "Game-score break check"
        );

        let first_server = match previous.first_server {
            Some(side) => Some(side),
            None => lookup::first_server(self.services.feed.as_ref(), live.id, 2)
                .await
                .or_else(|| breaks::infer_first_server(second)),
        };

        tracker.update_game_state(
            live.id,
            GameTrackingState {
                prev_set2: Some(second),
                first_server,
            },
        );
    }

    /// Write a log row. Returns whether a row was written.
    async fn log_match(&self, tracker: &mut MatchTracker, live: &LiveMatch) -> Result<bool> {
        if self.dedupe_rows && tracker.is_logged(live.id) {
            debug!(match_id = %live.id, "Already logged");
            return Ok(false);
        }
        info!(
            match_id = %live.id,
            games = %live.set_games(3).unwrap_or_default(),
            "Qualifies: one set all, early 3rd set"
        );

        let Some(stats) = lookup::statistics(self.services.feed.as_ref(), live.id).await else {
            warn!(match_id = %live.id, "Qualifying match has no statistics, not logged");
            return Ok(false);
        };

        let live_odds = lookup::decimal_odds(self.services.odds.as_ref(), live).await;
        let live_label = odds_label(live_odds);
        let starting_label = tracker
            .starting_odds(live.id)
            .map_or_else(|| live_label.clone(), |odds| odds.to_string());

        let record = MatchRecord {
            recorded_at: Local::now(),
            live: live.clone(),
            stats,
            starting_odds: starting_label,
            live_odds: live_label,
        };
        self.services.recorder.record(&record).await?;
        tracker.mark_logged(live.id);

        info!(
            match_id = %live.id,
            match_title = %live.title(),
            starting_odds = %record.starting_odds,
            live_odds = %record.live_odds,
            "Match logged"
        );
        Ok(true)
    }
}
