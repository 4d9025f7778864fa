//! Application services: the tracker, alert senders, per-match pipeline and
//! the poll loop that drives them.

pub mod alert;
pub mod lookup;
pub mod monitor;
pub mod pipeline;
pub mod tracker;

pub use monitor::{Monitor, TickSummary};
pub use pipeline::{MatchOutcome, MatchPipeline, Services};
pub use tracker::{GameTrackingState, MatchAlertState, MatchTracker};
