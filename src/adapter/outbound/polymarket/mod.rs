//! Polymarket Gamma integration: market search and odds resolution.

pub mod client;
pub mod dto;
pub mod matcher;
pub mod settings;

pub use client::PolymarketClient;
pub use settings::PolymarketConfig;
