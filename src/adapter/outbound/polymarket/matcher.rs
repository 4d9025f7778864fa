//! Fuzzy matching of player names against market events and outcome labels.
//!
//! Outcome labels are resolved by an ordered list of strategies. For each
//! strategy in turn, every unassigned outcome is tried against the first
//! player, then the second; the first hit wins. When names cannot place both
//! players on distinct outcomes, the outcome order is assumed to follow the
//! player order, and the result is flagged as positional.

use rust_decimal::Decimal;
use tracing::debug;

use super::dto::{GammaEvent, GammaMarket};
use crate::domain::name::{fold, surname_key};
use crate::domain::Probabilities;

/// Comparable forms of a name or label.
#[derive(Debug, Clone)]
pub struct NameKey {
    lower: String,
    folded: String,
    surname: String,
}

impl NameKey {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            lower: name.to_lowercase(),
            folded: fold(name),
            surname: surname_key(name),
        }
    }

    fn is_empty(&self) -> bool {
        self.lower.trim().is_empty()
    }
}

/// One way of deciding that an outcome label names a player.
pub struct OutcomeMatcher {
    pub name: &'static str,
    matches: fn(player: &NameKey, outcome: &NameKey) -> bool,
}

impl OutcomeMatcher {
    fn matches(&self, player: &NameKey, outcome: &NameKey) -> bool {
        !outcome.is_empty() && !player.is_empty() && (self.matches)(player, outcome)
    }
}

/// Strategies in priority order.
pub const STRATEGIES: &[OutcomeMatcher] = &[
    OutcomeMatcher {
        name: "full_name",
        matches: |p, o| o.lower.contains(&p.lower) || p.lower.contains(&o.lower),
    },
    OutcomeMatcher {
        name: "surname_in_label",
        matches: |p, o| o.folded.contains(&p.surname),
    },
    OutcomeMatcher {
        name: "surname_equal",
        matches: |p, o| o.surname == p.surname,
    },
    OutcomeMatcher {
        name: "surname_overlap",
        matches: |p, o| o.surname.contains(&p.surname) || p.surname.contains(&o.surname),
    },
];

/// How outcome prices were assigned to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConfidence {
    /// Both players were placed by name.
    Named,
    /// Names were ambiguous; first outcome taken as the first player.
    Positional,
}

/// Probabilities resolved from one market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOdds {
    pub probabilities: Probabilities,
    pub confidence: MatchConfidence,
}

/// Both players of a fixture, in feed order.
#[derive(Debug, Clone)]
pub struct Pairing {
    home: NameKey,
    away: NameKey,
}

impl Pairing {
    #[must_use]
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: NameKey::new(home),
            away: NameKey::new(away),
        }
    }

    /// Whether an event title names both players.
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        let title = NameKey::new(title);
        let named = |player: &NameKey| {
            !player.is_empty()
                && (title.lower.contains(&player.lower) || title.folded.contains(&player.surname))
        };
        named(&self.home) && named(&self.away)
    }

    /// First event whose title names both players.
    #[must_use]
    pub fn find_event<'a>(&self, events: &'a [GammaEvent]) -> Option<&'a GammaEvent> {
        events.iter().find(|event| self.title_matches(&event.title))
    }

    fn names_player(&self, player: &NameKey, outcomes: &[NameKey]) -> bool {
        outcomes
            .iter()
            .any(|outcome| STRATEGIES.iter().any(|s| s.matches(player, outcome)))
    }

    /// Pick the head-to-head market of an event.
    ///
    /// Only markets with two or more outcomes naming both players count. A
    /// match-winner market is preferred, then any market not about a set.
    #[must_use]
    pub fn select_market<'a>(&self, markets: &'a [GammaMarket]) -> Option<&'a GammaMarket> {
        let candidates: Vec<&GammaMarket> = markets
            .iter()
            .filter(|market| {
                let outcomes: Vec<NameKey> =
                    market.outcome_names().iter().map(|o| NameKey::new(o)).collect();
                outcomes.len() >= 2
                    && self.names_player(&self.home, &outcomes)
                    && self.names_player(&self.away, &outcomes)
            })
            .collect();

        let question = |market: &GammaMarket| market.question.to_lowercase();
        candidates
            .iter()
            .find(|market| {
                let q = question(market);
                q.contains("match winner") || (q.contains("winner") && !q.contains("set"))
            })
            .or_else(|| candidates.iter().find(|market| !question(market).contains("set")))
            .copied()
    }

    /// Indices of the outcomes naming the home and away player.
    #[must_use]
    pub fn assign_outcomes(&self, outcomes: &[String]) -> Option<(usize, usize)> {
        let keys: Vec<NameKey> = outcomes.iter().map(|o| NameKey::new(o)).collect();
        let mut home = None;
        let mut away = None;

        for strategy in STRATEGIES {
            for (index, outcome) in keys.iter().enumerate() {
                if home == Some(index) || away == Some(index) {
                    continue;
                }
                if home.is_none() && strategy.matches(&self.home, outcome) {
                    debug!(strategy = strategy.name, index, "Home outcome matched");
                    home = Some(index);
                } else if away.is_none() && strategy.matches(&self.away, outcome) {
                    debug!(strategy = strategy.name, index, "Away outcome matched");
                    away = Some(index);
                }
            }
            if let (Some(h), Some(a)) = (home, away) {
                return Some((h, a));
            }
        }
        None
    }

    /// Resolve probabilities for both players from one market.
    #[must_use]
    pub fn resolve(&self, market: &GammaMarket) -> Option<ResolvedOdds> {
        let prices = market.outcome_prices();
        if prices.len() < 2 {
            return None;
        }
        let price = |index: usize| prices.get(index).copied().flatten();

        if let Some((h, a)) = self.assign_outcomes(&market.outcome_names()) {
            if let (Some(home), Some(away)) = (price(h), price(a)) {
                return Some(ResolvedOdds {
                    probabilities: Probabilities::new(home, away),
                    confidence: MatchConfidence::Named,
                });
            }
        }

        let (home, away): (Decimal, Decimal) = (price(0)?, price(1)?);
        Some(ResolvedOdds {
            probabilities: Probabilities::new(home, away),
            confidence: MatchConfidence::Positional,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn market(question: &str, outcomes: &[&str], prices: &[&str]) -> GammaMarket {
        GammaMarket {
            question: question.into(),
            outcomes: Some(json!(outcomes)),
            outcome_prices: Some(json!(prices)),
        }
    }

    #[test]
    fn title_match_uses_surnames_and_folding() {
        let pairing = Pairing::new("Tomáš Macháč", "Jannik Sinner");
        assert!(pairing.title_matches("Machac vs. Sinner"));
        assert!(pairing.title_matches("ATP: Tomáš Macháč vs Jannik Sinner"));
        assert!(!pairing.title_matches("Sinner vs. Djokovic"));
    }

    #[test]
    fn outcomes_matched_by_name_regardless_of_order() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let m = market("Alcaraz vs Sinner", &["Sinner", "Alcaraz"], &["0.6", "0.4"]);
        let resolved = pairing.resolve(&m).unwrap();
        assert_eq!(resolved.confidence, MatchConfidence::Named);
        assert_eq!(resolved.probabilities, Probabilities::new(dec!(0.4), dec!(0.6)));
    }

    #[test]
    fn shared_surname_assigns_in_listing_order() {
        let pairing = Pairing::new("Venus Williams", "Serena Williams");
        let m = market("Williams vs Williams", &["V. Williams", "S. Williams"], &["0.3", "0.7"]);
        let resolved = pairing.resolve(&m).unwrap();
        // The first label goes to the home player, the second to the away player.
        assert_eq!(resolved.confidence, MatchConfidence::Named);
        assert_eq!(resolved.probabilities, Probabilities::new(dec!(0.3), dec!(0.7)));
    }

    #[test]
    fn unmatched_labels_use_positional_fallback() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let m = market("Winner", &["Player A", "Player B"], &["0.55", "0.45"]);
        let resolved = pairing.resolve(&m).unwrap();
        assert_eq!(resolved.confidence, MatchConfidence::Positional);
        assert_eq!(resolved.probabilities, Probabilities::new(dec!(0.55), dec!(0.45)));
    }

    #[test]
    fn match_winner_market_preferred_over_set_market() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let markets = vec![
            market("Set 1 Winner", &["Alcaraz", "Sinner"], &["0.5", "0.5"]),
            market("Total games over 22.5", &["Alcaraz", "Sinner"], &["0.5", "0.5"]),
            market("Match Winner", &["Alcaraz", "Sinner"], &["0.6", "0.4"]),
        ];
        let selected = pairing.select_market(&markets).unwrap();
        assert_eq!(selected.question, "Match Winner");
    }

    #[test]
    fn non_set_market_used_without_winner_market() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let markets = vec![
            market("Set 1 Winner", &["Alcaraz", "Sinner"], &["0.5", "0.5"]),
            market("Alcaraz vs. Sinner", &["Alcaraz", "Sinner"], &["0.6", "0.4"]),
        ];
        assert_eq!(pairing.select_market(&markets).unwrap().question, "Alcaraz vs. Sinner");
    }

    #[test]
    fn markets_without_both_players_are_ignored() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let markets = vec![
            market("Match Winner", &["Yes", "No"], &["0.5", "0.5"]),
            market("Set 1 Winner", &["Alcaraz", "Sinner"], &["0.5", "0.5"]),
        ];
        assert!(pairing.select_market(&markets).is_none());
    }

    #[test]
    fn unparsable_prices_fail() {
        let pairing = Pairing::new("Carlos Alcaraz", "Jannik Sinner");
        let m = market("Match Winner", &["Alcaraz", "Sinner"], &["abc", "0.4"]);
        assert!(pairing.resolve(&m).is_none());
    }
}
