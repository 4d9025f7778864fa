//! Configuration: TOML settings and logging initialisation.

pub mod logging;
pub mod monitor;
pub mod settings;
pub mod telegram;

pub use settings::Config;
