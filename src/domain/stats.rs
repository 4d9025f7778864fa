//! Per-player statistic snapshot.
//!
//! Every counter is a plain integer. Fields the provider did not report are
//! zero, so derived ratios never have to deal with absent values.

use super::player::{PerSide, Side};

/// Fixed schema of counters for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub first_serve_pct: u32,
    pub second_serve_pct: u32,
    /// Points the opponent won while this player served.
    pub opp_pts_on_serve: u32,
    pub bp_faced: u32,
    pub bp_saved: u32,
    pub aces: u32,
    pub double_faults: u32,
    pub total_points: u32,
    pub service_points_won: u32,
    pub receiver_points_won: u32,
    pub games_won: u32,
    pub first_serve_points: u32,
    pub second_serve_points: u32,
    pub bp_converted: u32,
}

impl PlayerStats {
    /// Break points saved as a fraction of break points faced.
    #[must_use]
    pub fn bp_saved_ratio(&self) -> f64 {
        ratio(self.bp_saved, self.bp_faced)
    }
}

/// Statistics for both players at one poll.
pub type StatSnapshot = PerSide<PlayerStats>;

/// A won/played pair with its share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointShare {
    pub won: u32,
    pub played: u32,
}

impl PointShare {
    /// Whole-number percentage, truncated.
    #[must_use]
    pub fn percent(self) -> u32 {
        // Ratio is within [0, 1] whenever won <= played; truncation is intended.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (ratio(self.won, self.played) * 100.0) as u32;
        pct
    }
}

/// Point-share breakdown shown in alert messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyStats {
    pub service: PointShare,
    pub ret: PointShare,
    pub total: PointShare,
    pub bp_saved: PointShare,
}

impl KeyStats {
    /// Derive the breakdown for one side of a snapshot.
    #[must_use]
    pub fn for_side(snapshot: &StatSnapshot, side: Side) -> Self {
        let own = snapshot.get(side);
        let other = snapshot.get(side.opponent());
        Self {
            service: PointShare {
                won: own.service_points_won,
                played: own.service_points_won.saturating_add(own.opp_pts_on_serve),
            },
            ret: PointShare {
                won: own.receiver_points_won,
                played: own.receiver_points_won.saturating_add(other.service_points_won),
            },
            total: PointShare {
                won: own.total_points,
                played: own.total_points.saturating_add(other.total_points),
            },
            bp_saved: PointShare {
                won: own.bp_saved,
                played: own.bp_faced,
            },
        }
    }
}

/// Safe division; zero when the denominator is zero.
#[must_use]
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
