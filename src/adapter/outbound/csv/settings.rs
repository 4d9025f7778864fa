//! Match log configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// `[recorder]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RecorderConfig {
    /// CSV file; parent directories are created on startup.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Write at most one row per match.
    #[serde(default)]
    pub dedupe_rows: bool,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/tennis_dawgs.csv")
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            dedupe_rows: false,
        }
    }
}
