//! Deciding-set tiebreak predicate.

use super::score::{ActiveSet, GameScore, SetScore};

/// True when the third set is being played at one set all and its game score
/// is 6-6.
///
/// Stateless; repeat suppression belongs to the tracker.
#[must_use]
pub fn is_third_set_tiebreak(sets: SetScore, active: ActiveSet, third_set: Option<GameScore>) -> bool {
    active == ActiveSet::Third
        && sets.is_one_all()
        && third_set == Some(GameScore::new(6, 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ALL: SetScore = SetScore::new(1, 1);
    const SIX_ALL: Option<GameScore> = Some(GameScore::new(6, 6));

    #[test]
    fn six_all_in_third_set_at_one_set_all() {
        assert!(is_third_set_tiebreak(ONE_ALL, ActiveSet::from_status("3rd set"), SIX_ALL));
    }

    #[test]
    fn any_single_deviation_is_false() {
        assert!(!is_third_set_tiebreak(ONE_ALL, ActiveSet::Third, Some(GameScore::new(6, 5))));
        assert!(!is_third_set_tiebreak(SetScore::new(2, 0), ActiveSet::Third, SIX_ALL));
        assert!(!is_third_set_tiebreak(ONE_ALL, ActiveSet::from_status("2nd set"), SIX_ALL));
        assert!(!is_third_set_tiebreak(ONE_ALL, ActiveSet::Third, None));
    }
}
