//! "Who is playing better" scorer used to annotate alerts.

use std::cmp::Ordering;

use super::player::Side;
use super::stats::{PlayerStats, StatSnapshot};

/// Outcome of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Better(Side),
    Tie,
}

impl Verdict {
    /// Whether this verdict favours `side`.
    #[must_use]
    pub fn favours(self, side: Side) -> bool {
        self == Self::Better(side)
    }
}

/// Direction in which a metric improves.
#[derive(Debug, Clone, Copy)]
enum Better {
    Higher,
    Lower,
}

type Metric = (Better, fn(&PlayerStats) -> f64);

const METRICS: [Metric; 11] = [
    (Better::Higher, |s| f64::from(s.first_serve_pct)),
    (Better::Higher, |s| f64::from(s.second_serve_pct)),
    (Better::Lower, |s| f64::from(s.opp_pts_on_serve)),
    (Better::Higher, PlayerStats::bp_saved_ratio),
    (Better::Higher, |s| f64::from(s.bp_converted)),
    (Better::Higher, |s| f64::from(s.total_points)),
    (Better::Higher, |s| f64::from(s.service_points_won)),
    (Better::Higher, |s| f64::from(s.receiver_points_won)),
    (Better::Higher, |s| f64::from(s.games_won)),
    (Better::Higher, |s| f64::from(s.aces)),
    (Better::Lower, |s| f64::from(s.double_faults)),
];

/// Award one point per metric to the better player; more points wins.
#[must_use]
pub fn compare(snapshot: &StatSnapshot) -> Verdict {
    let (mut home, mut away) = (0u32, 0u32);
    for (better, value) in METRICS {
        let ordering = value(&snapshot.home)
            .partial_cmp(&value(&snapshot.away))
            .unwrap_or(Ordering::Equal);
        let ordering = match better {
            Better::Higher => ordering,
            Better::Lower => ordering.reverse(),
        };
        match ordering {
            Ordering::Greater => home += 1,
            Ordering::Less => away += 1,
            Ordering::Equal => {}
        }
    }

    match home.cmp(&away) {
        Ordering::Greater => Verdict::Better(Side::Home),
        Ordering::Less => Verdict::Better(Side::Away),
        Ordering::Equal => Verdict::Tie,
    }
}
