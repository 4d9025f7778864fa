//! Poll loop settings.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{default_allowed_tournaments, TourCategory, TournamentFilter};

/// `[monitor]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds slept between the end of one tick and the start of the next.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Tournament categories that are processed; everything else is skipped.
    #[serde(default = "default_allowed_tournaments")]
    pub allowed_tournaments: Vec<TourCategory>,
}

const fn default_poll_interval_secs() -> u64 {
    15
}

impl MonitorConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn tournament_filter(&self) -> TournamentFilter {
        TournamentFilter::new(self.allowed_tournaments.clone())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            allowed_tournaments: default_allowed_tournaments(),
        }
    }
}
