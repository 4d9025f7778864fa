//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Live-scores provider match identifier.
///
/// Stable for the lifetime of a match; every durable tracker entry is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(i64);

impl MatchId {
    /// Create a new `MatchId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw provider identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MatchId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_id_displays_raw_value() {
        assert_eq!(MatchId::new(12_345).to_string(), "12345");
    }

    #[test]
    fn match_id_from_i64() {
        let id: MatchId = 7.into();
        assert_eq!(id.value(), 7);
    }
}
