//! Poll loop.
//!
//! One tick fetches the live set, runs every match through the
//! [`MatchPipeline`] strictly one after another, then reconciles the tracker
//! against the live set. Ticks never overlap: the loop awaits a whole tick
//! before sleeping for the poll interval.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{error, info, warn};

use super::pipeline::{MatchOutcome, MatchPipeline};
use super::tracker::MatchTracker;
use crate::domain::MatchId;
use crate::error::Result;

/// Counters reported after each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Matches in the live set.
    pub checked: usize,
    /// Matches dropped by the tournament allow-list.
    pub skipped: usize,
    /// Matches meeting the logging criterion.
    pub qualified: usize,
    /// Rows written.
    pub logged: usize,
    pub alerts_sent: usize,
    /// Matches whose tracker state was dropped.
    pub evicted: usize,
}

impl TickSummary {
    fn add(&mut self, outcome: &MatchOutcome) {
        if outcome.skipped {
            self.skipped += 1;
        }
        if outcome.qualified {
            self.qualified += 1;
        }
        if outcome.logged {
            self.logged += 1;
        }
        self.alerts_sent += outcome.alerts_sent.len();
    }
}

pub struct Monitor {
    pipeline: MatchPipeline,
    tracker: MatchTracker,
    poll_interval: Duration,
}

impl Monitor {
    #[must_use]
    pub fn new(pipeline: MatchPipeline, poll_interval: Duration) -> Self {
        Self {
            pipeline,
            tracker: MatchTracker::new(),
            poll_interval,
        }
    }

    #[must_use]
    pub const fn tracker(&self) -> &MatchTracker {
        &self.tracker
    }

    /// Run one poll cycle.
    ///
    /// # Errors
    ///
    /// Fails only when the live set cannot be fetched. Tracker state is left
    /// untouched in that case; an empty but successful fetch still
    /// reconciles.
    pub async fn tick(&mut self) -> Result<TickSummary> {
        let matches = self.pipeline.services().feed.live_matches().await?;
        info!(count = matches.len(), "Fetched live events");

        let mut summary = TickSummary {
            checked: matches.len(),
            ..TickSummary::default()
        };

        for live in &matches {
            match self.pipeline.process(&mut self.tracker, live).await {
                Ok(outcome) => summary.add(&outcome),
                Err(e) => {
                    warn!(match_id = %live.id, error = %e, "Match processing failed");
                }
            }
        }

        let live_ids: HashSet<MatchId> = matches.iter().map(|live| live.id).collect();
        summary.evicted = self.tracker.reconcile(&live_ids);
        if summary.evicted > 0 {
            info!(evicted = summary.evicted, "Evicted finished matches");
        }

        Ok(summary)
    }

    /// Poll until the task is dropped.
    pub async fn run(&mut self) {
        info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            "Starting live match monitoring"
        );
        loop {
            let result = self.tick().await;
            match result {
                Ok(summary) => info!(
                    checked = summary.checked,
                    skipped = summary.skipped,
                    qualified = summary.qualified,
                    logged = summary.logged,
                    alerts = summary.alerts_sent,
                    evicted = summary.evicted,
                    tracked = self.tracker.tracked_matches(),
                    "Tick complete"
                ),
                Err(e) => error!(error = %e, "Tick failed"),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
