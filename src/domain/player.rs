//! Players and sides of a match.

use std::fmt;

/// One side of a singles match, as the provider orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First-listed player (P1).
    Home,
    /// Second-listed player (P2).
    Away,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Short label used in logs and messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "P1",
            Self::Away => "P2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player identity as reported by the live feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub ranking: Option<u32>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, ranking: Option<u32>) -> Self {
        Self {
            name: name.into(),
            ranking,
        }
    }

    /// Ranking as `#N`, or `N/A` when the feed had none.
    #[must_use]
    pub fn ranking_label(&self) -> String {
        self.ranking
            .map_or_else(|| "N/A".to_string(), |rank| format!("#{rank}"))
    }
}

/// A value held once per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    #[must_use]
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// Borrow the value for one side.
    #[must_use]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_side() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
    }

    #[test]
    fn ranking_label_formats_missing_ranking() {
        assert_eq!(Player::new("A", Some(12)).ranking_label(), "#12");
        assert_eq!(Player::new("B", None).ranking_label(), "N/A");
    }

    #[test]
    fn per_side_get() {
        let pair = PerSide::new(3, 5);
        assert_eq!(*pair.get(Side::Home), 3);
        assert_eq!(*pair.get(Side::Away), 5);
    }
}
