//! Per-match state carried across poll ticks.
//!
//! [`MatchTracker`] is the only holder of cross-tick state. Every store is
//! keyed by [`MatchId`]; entries live until [`MatchTracker::reconcile`] sees
//! the match drop out of the live set. Nothing is evicted by age or count.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};

use crate::domain::breaks::ConvertedCounts;
use crate::domain::{DecimalOdds, GameScore, MatchId, Side};
use crate::port::outbound::notifier::AlertKind;

/// Which alerts have been delivered for a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchAlertState {
    pub one_one_sent: bool,
    pub break_sent: bool,
    pub tiebreak_sent: bool,
    /// Set once a CSV row was written; only consulted when row
    /// de-duplication is enabled.
    pub logged: bool,
    pub last_sent_at: Option<DateTime<Local>>,
}

impl MatchAlertState {
    #[must_use]
    pub const fn is_sent(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::OneOne => self.one_one_sent,
            AlertKind::Break => self.break_sent,
            AlertKind::Tiebreak => self.tiebreak_sent,
        }
    }

    fn mark_sent(&mut self, kind: AlertKind, at: DateTime<Local>) {
        match kind {
            AlertKind::OneOne => self.one_one_sent = true,
            AlertKind::Break => self.break_sent = true,
            AlertKind::Tiebreak => self.tiebreak_sent = true,
        }
        self.last_sent_at = Some(at);
    }
}

/// Second-set game tracking for the game-score break detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTrackingState {
    pub prev_set2: Option<GameScore>,
    pub first_server: Option<Side>,
}

/// Keyed state store for every live match.
#[derive(Debug, Default)]
pub struct MatchTracker {
    alerts: HashMap<MatchId, MatchAlertState>,
    breaks: HashMap<MatchId, ConvertedCounts>,
    games: HashMap<MatchId, GameTrackingState>,
    starting_odds: HashMap<MatchId, DecimalOdds>,
}

impl MatchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn alert_state(&self, id: MatchId) -> Option<&MatchAlertState> {
        self.alerts.get(&id)
    }

    #[must_use]
    pub fn is_sent(&self, id: MatchId, kind: AlertKind) -> bool {
        self.alerts.get(&id).is_some_and(|state| state.is_sent(kind))
    }

    /// Record a confirmed delivery.
    pub fn mark_sent(&mut self, id: MatchId, kind: AlertKind, at: DateTime<Local>) {
        self.alerts.entry(id).or_default().mark_sent(kind, at);
    }

    #[must_use]
    pub fn is_logged(&self, id: MatchId) -> bool {
        self.alerts.get(&id).is_some_and(|state| state.logged)
    }

    pub fn mark_logged(&mut self, id: MatchId) {
        self.alerts.entry(id).or_default().logged = true;
    }

    /// Break points converted at the previous statistics fetch.
    #[must_use]
    pub fn previous_converted(&self, id: MatchId) -> Option<ConvertedCounts> {
        self.breaks.get(&id).copied()
    }

    pub fn update_converted(&mut self, id: MatchId, counts: ConvertedCounts) {
        self.breaks.insert(id, counts);
    }

    #[must_use]
    pub fn game_state(&self, id: MatchId) -> Option<GameTrackingState> {
        self.games.get(&id).copied()
    }

    pub fn update_game_state(&mut self, id: MatchId, state: GameTrackingState) {
        self.games.insert(id, state);
    }

    #[must_use]
    pub fn starting_odds(&self, id: MatchId) -> Option<DecimalOdds> {
        self.starting_odds.get(&id).copied()
    }

    /// Store the first resolved odds for a match. Later values are ignored.
    ///
    /// Returns `true` when the odds were stored.
    pub fn record_starting_odds(&mut self, id: MatchId, odds: DecimalOdds) -> bool {
        if self.starting_odds.contains_key(&id) {
            return false;
        }
        self.starting_odds.insert(id, odds);
        true
    }

    /// Number of distinct matches with any stored state.
    #[must_use]
    pub fn tracked_matches(&self) -> usize {
        self.alerts
            .keys()
            .chain(self.breaks.keys())
            .chain(self.games.keys())
            .chain(self.starting_odds.keys())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Drop every entry whose match is not in `live`, across all stores.
    ///
    /// Returns the number of distinct matches evicted.
    pub fn reconcile(&mut self, live: &HashSet<MatchId>) -> usize {
        let mut evicted = HashSet::new();
        let mut retain = |id: &MatchId| {
            let keep = live.contains(id);
            if !keep {
                evicted.insert(*id);
            }
            keep
        };
        self.alerts.retain(|id, _| retain(id));
        self.breaks.retain(|id, _| retain(id));
        self.games.retain(|id, _| retain(id));
        self.starting_odds.retain(|id, _| retain(id));
        evicted.len()
    }
}
