//! Decimal odds derived from market-implied probabilities.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Label used wherever odds could not be resolved.
pub const UNAVAILABLE: &str = "N/A";

/// Implied win probabilities for both players, as priced by a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probabilities {
    pub home: Decimal,
    pub away: Decimal,
}

impl Probabilities {
    #[must_use]
    pub const fn new(home: Decimal, away: Decimal) -> Self {
        Self { home, away }
    }
}

/// Decimal odds pair (`1 / probability`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalOdds {
    pub home: Decimal,
    pub away: Decimal,
}

impl DecimalOdds {
    /// Convert both probabilities, or neither.
    ///
    /// A non-positive probability on either side fails the whole conversion.
    #[must_use]
    pub fn from_probabilities(probabilities: Probabilities) -> Option<Self> {
        Some(Self {
            home: reciprocal(probabilities.home)?,
            away: reciprocal(probabilities.away)?,
        })
    }
}

fn reciprocal(probability: Decimal) -> Option<Decimal> {
    if probability <= Decimal::ZERO {
        return None;
    }
    Decimal::ONE.checked_div(probability)
}

impl fmt::Display for DecimalOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let round = |d: Decimal| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}/{:.2}", round(self.home), round(self.away))
    }
}

/// Render optional odds, falling back to [`UNAVAILABLE`].
#[must_use]
pub fn odds_label(odds: Option<DecimalOdds>) -> String {
    odds.map_or_else(|| UNAVAILABLE.to_string(), |odds| odds.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_probabilities_to_decimal_odds() {
        let odds = DecimalOdds::from_probabilities(Probabilities::new(dec!(0.4), dec!(0.5))).unwrap();
        assert_eq!(odds.home, dec!(2.5));
        assert_eq!(odds.away, dec!(2));
        assert_eq!(odds.to_string(), "2.50/2.00");
    }

    #[test]
    fn non_positive_probability_fails_both_sides() {
        assert_eq!(DecimalOdds::from_probabilities(Probabilities::new(dec!(0), dec!(0.5))), None);
        assert_eq!(DecimalOdds::from_probabilities(Probabilities::new(dec!(0.5), dec!(-0.1))), None);
    }

    #[test]
    fn label_rounds_to_two_places() {
        let odds = DecimalOdds::from_probabilities(Probabilities::new(dec!(0.3), dec!(0.7))).unwrap();
        assert_eq!(odds_label(Some(odds)), "3.33/1.43");
        assert_eq!(odds_label(None), "N/A");
    }
}
