//! SofaScore live-scores integration.

pub mod client;
pub mod convert;
pub mod dto;
pub mod extract;
pub mod settings;

pub use client::SofascoreClient;
pub use settings::SofascoreConfig;
