//! A live match as observed on one poll.

use super::id::MatchId;
use super::player::{PerSide, Player};
use super::score::{ActiveSet, GameScore, SetGames, SetScore};
use super::tournament::TourCategory;

/// Rebuilt from the feed on every poll; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveMatch {
    pub id: MatchId,
    pub players: PerSide<Player>,
    pub category: TourCategory,
    pub tournament_name: Option<String>,
    /// `None` when either side's set count is missing from the feed.
    pub sets: Option<SetScore>,
    pub games: SetGames,
    pub status: String,
}

impl LiveMatch {
    /// Set inferred from the status text.
    #[must_use]
    pub fn active_set(&self) -> ActiveSet {
        ActiveSet::from_status(&self.status)
    }

    /// Game score of the set in progress.
    #[must_use]
    pub fn current_games(&self) -> Option<GameScore> {
        self.games.current(self.active_set())
    }

    /// Game score of a specific set (one-based).
    #[must_use]
    pub fn set_games(&self, number: u8) -> Option<GameScore> {
        self.games.set(number)
    }

    /// Set score for display, `N/A` when incomplete.
    #[must_use]
    pub fn sets_label(&self) -> String {
        self.sets.map_or_else(|| "N/A".to_string(), |sets| sets.to_string())
    }

    /// `home vs away`, for log lines.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} vs {}", self.players.home.name, self.players.away.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: &str) -> LiveMatch {
        LiveMatch {
            id: MatchId::new(7),
            players: PerSide::new(Player::new("A B", Some(3)), Player::new("C D", None)),
            category: TourCategory::Atp,
            tournament_name: None,
            sets: Some(SetScore::new(1, 1)),
            games: SetGames::new([Some(6), Some(4), Some(2)], [Some(3), Some(6), Some(1)]),
            status: status.to_string(),
        }
    }

    #[test]
    fn current_games_follow_status() {
        assert_eq!(sample("3rd set").current_games(), Some(GameScore::new(2, 1)));
        assert_eq!(sample("2nd set").current_games(), Some(GameScore::new(4, 6)));
    }

    #[test]
    fn incomplete_sets_label() {
        let mut live = sample("2nd set");
        assert_eq!(live.sets_label(), "1-1");
        live.sets = None;
        assert_eq!(live.sets_label(), "N/A");
    }

    #[test]
    fn title_joins_names() {
        assert_eq!(sample("").title(), "A B vs C D");
    }
}
