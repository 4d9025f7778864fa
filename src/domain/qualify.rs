//! Logging qualification: one set all, early in the deciding set.

use super::score::{GameScore, SetScore};

/// Largest game difference in the third set that still qualifies.
pub const MAX_GAME_DIFFERENCE: u32 = 1;

/// Whether a match qualifies for a log row.
///
/// The status text must literally say "3rd set". Unknown third-set games count
/// as 0-0.
#[must_use]
pub fn qualifies_for_log(sets: SetScore, status: &str, third_set: Option<GameScore>) -> bool {
    sets.is_one_all()
        && status.contains("3rd set")
        && third_set.unwrap_or_default().difference() <= MAX_GAME_DIFFERENCE
}
