//! Outbound adapters (driven side).

pub mod csv;
pub mod notifier;
pub mod polymarket;
pub mod sofascore;
