//! Provider-agnostic tennis domain: scores, statistics and the heuristics
//! that classify them.

pub mod breaks;
pub mod comparison;
pub mod name;
pub mod odds;
pub mod qualify;
pub mod tiebreak;

mod id;
mod live_match;
mod player;
mod score;
mod stats;
mod tournament;

pub use comparison::Verdict;
pub use id::MatchId;
pub use live_match::LiveMatch;
pub use odds::{DecimalOdds, Probabilities};
pub use player::{PerSide, Player, Side};
pub use score::{ActiveSet, GameScore, SetGames, SetScore};
pub use stats::{ratio, KeyStats, PlayerStats, PointShare, StatSnapshot};
pub use tournament::{default_allowed_tournaments, TourCategory, TournamentFilter};
