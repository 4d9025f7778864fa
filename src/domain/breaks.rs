//! Serve-break detection.
//!
//! The primary detector compares break-points-converted counters between two
//! consecutive stat snapshots. A break is only reported for a player trailing
//! 0-1 in sets; breaks by a leading or level player are never reported.
//!
//! The game-score detector is the older approach. It needs to know who served
//! first in the set and abstains whenever that is unknown or more than one
//! game elapsed between observations.

use super::player::{PerSide, Side};
use super::score::{GameScore, SetScore};

/// Break points converted by each player.
pub type ConvertedCounts = PerSide<u32>;

/// Detect a break from break-points-converted counters.
///
/// Returns the breaking side. Without a previous observation this always
/// returns `None`; the first snapshot is a baseline only.
#[must_use]
pub fn detect_from_stats(
    current: ConvertedCounts,
    previous: Option<ConvertedCounts>,
    sets: SetScore,
) -> Option<Side> {
    let previous = previous?;
    let trailing = sets.trailing_by_one_set()?;
    (current.get(trailing) > previous.get(trailing)).then_some(trailing)
}

/// Whether a detected break is worth alerting on.
///
/// The breaker must be the player down 0-1 in sets, and the break must have
/// brought them level or ahead in the set being played.
#[must_use]
pub fn is_alert_worthy(breaker: Side, sets: SetScore, set_games: GameScore) -> bool {
    sets.trailing_by_one_set() == Some(breaker)
        && set_games.of(breaker) >= set_games.of(breaker.opponent())
}

/// Detect a break from the change in a set's game score.
///
/// Game `n` of a set is served by the first server when `n` is odd. Exactly
/// one new game must separate the two observations. A game won by the server
/// is a hold; a game won by the receiver is a break only when the receiver
/// trails 0-1 in sets.
#[must_use]
pub fn detect_from_games(
    current: GameScore,
    previous: Option<GameScore>,
    first_server: Option<Side>,
    sets: SetScore,
) -> Option<Side> {
    let previous = previous?;
    let first_server = first_server?;
    if previous.total().checked_add(1) != Some(current.total()) {
        return None;
    }

    let game_number = current.total();
    let server = if game_number % 2 == 1 {
        first_server
    } else {
        first_server.opponent()
    };

    if current.of(server) > previous.of(server) {
        return None;
    }
    let receiver = server.opponent();
    let receiver_won = current.of(receiver) > previous.of(receiver);
    (receiver_won && sets.trailing_by_one_set() == Some(receiver)).then_some(receiver)
}

/// Infer who served first in a set from its game score.
///
/// With an odd number of games played, the first server has served one game
/// more, and the leader is taken as the first server (ties go to the away
/// side). With an even total, or no games, the answer is unknown.
#[must_use]
pub fn infer_first_server(games: GameScore) -> Option<Side> {
    let total = games.total();
    if total == 0 || total % 2 == 0 {
        return None;
    }
    Some(if games.home > games.away {
        Side::Home
    } else {
        Side::Away
    })
}

/// First server of a given set, from the first server of the match.
///
/// Odd sets start with the match's first server, even sets with the other player.
#[must_use]
pub const fn first_server_of_set(match_first_server: Side, set: u8) -> Side {
    if set % 2 == 1 {
        match_first_server
    } else {
        match_first_server.opponent()
    }
}
