//! Score types: sets, games, and which set is being played.

use std::fmt;

use super::player::Side;

/// Which set the status text says is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSet {
    First,
    Second,
    Third,
    Unknown,
}

impl ActiveSet {
    /// Infer the active set from the provider's free-text status
    /// ("1st set", "Second set", ...).
    #[must_use]
    pub fn from_status(description: &str) -> Self {
        let status = description.to_lowercase();
        if status.contains("3rd set") || status.contains("third set") {
            Self::Third
        } else if status.contains("2nd set") || status.contains("second set") {
            Self::Second
        } else if status.contains("1st set") || status.contains("first set") {
            Self::First
        } else {
            Self::Unknown
        }
    }

    /// One-based set number, if known.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Unknown => None,
        }
    }
}

/// Sets won by each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetScore {
    pub home: u32,
    pub away: u32,
}

impl SetScore {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Both counts, or nothing when either side is missing.
    #[must_use]
    pub const fn from_counts(home: Option<u32>, away: Option<u32>) -> Option<Self> {
        match (home, away) {
            (Some(home), Some(away)) => Some(Self::new(home, away)),
            _ => None,
        }
    }

    /// One set all.
    #[must_use]
    pub const fn is_one_all(self) -> bool {
        self.home == 1 && self.away == 1
    }

    /// The player down 0-1 in sets, if any.
    #[must_use]
    pub const fn trailing_by_one_set(self) -> Option<Side> {
        match (self.home, self.away) {
            (0, 1) => Some(Side::Home),
            (1, 0) => Some(Side::Away),
            _ => None,
        }
    }

    /// Sets won by one side.
    #[must_use]
    pub const fn of(self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Games won by each player within one set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameScore {
    pub home: u32,
    pub away: u32,
}

impl GameScore {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Games played so far in the set, saturating on absurd counts.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.home.saturating_add(self.away)
    }

    /// Absolute game difference.
    #[must_use]
    pub const fn difference(self) -> u32 {
        self.home.abs_diff(self.away)
    }

    /// Games won by one side.
    #[must_use]
    pub const fn of(self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Per-set game counts as the feed reports them. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetGames {
    home: [Option<u32>; 3],
    away: [Option<u32>; 3],
}

impl SetGames {
    /// Build from `(home, away)` game counts for sets one to three.
    #[must_use]
    pub const fn new(home: [Option<u32>; 3], away: [Option<u32>; 3]) -> Self {
        Self { home, away }
    }

    /// Games for a one-based set number, when both sides are known.
    #[must_use]
    pub fn set(&self, number: u8) -> Option<GameScore> {
        let index = usize::from(number.checked_sub(1)?);
        match (self.home.get(index)?, self.away.get(index)?) {
            (Some(home), Some(away)) => Some(GameScore::new(*home, *away)),
            _ => None,
        }
    }

    /// Games in the active set.
    ///
    /// With an unrecognised status, each side independently takes the first
    /// non-zero count among sets three, two and one, else its set-one value.
    #[must_use]
    pub fn current(&self, active: ActiveSet) -> Option<GameScore> {
        if let Some(number) = active.number() {
            return self.set(number);
        }
        let home = Self::latest_non_zero(&self.home)?;
        let away = Self::latest_non_zero(&self.away)?;
        Some(GameScore::new(home, away))
    }

    fn latest_non_zero(periods: &[Option<u32>; 3]) -> Option<u32> {
        periods
            .iter()
            .rev()
            .flatten()
            .copied()
            .find(|games| *games != 0)
            .or(periods[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_set_from_status_variants() {
        assert_eq!(ActiveSet::from_status("3rd set"), ActiveSet::Third);
        assert_eq!(ActiveSet::from_status("Third set"), ActiveSet::Third);
        assert_eq!(ActiveSet::from_status("2nd set"), ActiveSet::Second);
        assert_eq!(ActiveSet::from_status("Second Set"), ActiveSet::Second);
        assert_eq!(ActiveSet::from_status("1st set"), ActiveSet::First);
        assert_eq!(ActiveSet::from_status("Pause"), ActiveSet::Unknown);
        assert_eq!(ActiveSet::from_status(""), ActiveSet::Unknown);
    }

    #[test]
    fn trailing_side_only_for_zero_one() {
        assert_eq!(SetScore::new(0, 1).trailing_by_one_set(), Some(Side::Home));
        assert_eq!(SetScore::new(1, 0).trailing_by_one_set(), Some(Side::Away));
        assert_eq!(SetScore::new(1, 1).trailing_by_one_set(), None);
        assert_eq!(SetScore::new(0, 0).trailing_by_one_set(), None);
        assert_eq!(SetScore::new(0, 2).trailing_by_one_set(), None);
    }

    #[test]
    fn set_games_requires_both_sides() {
        let games = SetGames::new([Some(6), Some(3), None], [Some(4), None, None]);
        assert_eq!(games.set(1), Some(GameScore::new(6, 4)));
        assert_eq!(games.set(2), None);
        assert_eq!(games.set(3), None);
        assert_eq!(games.set(0), None);
        assert_eq!(games.set(4), None);
    }

    #[test]
    fn current_uses_active_set() {
        let games = SetGames::new([Some(6), Some(3), Some(1)], [Some(4), Some(6), Some(0)]);
        assert_eq!(games.current(ActiveSet::Second), Some(GameScore::new(3, 6)));
        assert_eq!(games.current(ActiveSet::Third), Some(GameScore::new(1, 0)));
    }

    #[test]
    fn current_falls_back_to_latest_non_zero_set() {
        let games = SetGames::new([Some(6), Some(2), None], [Some(4), Some(0), None]);
        // Home: set two is the latest non-zero. Away: set two is 0, so set one.
        assert_eq!(games.current(ActiveSet::Unknown), Some(GameScore::new(2, 4)));
    }

    #[test]
    fn game_score_difference_and_total() {
        let score = GameScore::new(2, 5);
        assert_eq!(score.difference(), 3);
        assert_eq!(score.total(), 7);
        assert_eq!(score.to_string(), "2-5");
    }
}
