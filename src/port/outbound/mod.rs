//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! One trait per external collaborator: the live-scores feed, the odds
//! market, the alert transport, and the durable match log.

pub mod feed;
pub mod notifier;
pub mod odds;
pub mod recorder;
