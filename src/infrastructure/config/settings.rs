//! Application configuration loading and validation.
//!
//! [`Config`] aggregates every section of `config.toml`. All sections are
//! optional; omitted keys take their documented defaults. Telegram
//! credentials never come from the file (see
//! [`TelegramConfig::from_env`](crate::adapter::outbound::notifier::telegram::TelegramConfig)).
//!
//! # Example
//!
//! ```no_run
//! use courtwatch::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::csv::RecorderConfig;
use crate::adapter::outbound::polymarket::PolymarketConfig;
use crate::adapter::outbound::sofascore::SofascoreConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Poll interval and tournament allow-list.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Live scores and statistics provider.
    #[serde(default)]
    pub sofascore: SofascoreConfig,

    /// Odds market search.
    #[serde(default)]
    pub polymarket: PolymarketConfig,

    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// CSV match log.
    #[serde(default)]
    pub recorder: RecorderConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, names an unknown tournament
    /// category, or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.monitor.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.sofascore.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sofascore.api_url" }.into());
        }
        if self.polymarket.gamma_api_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "polymarket.gamma_api_url",
            }
            .into());
        }
        if self.sofascore.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sofascore.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.polymarket.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polymarket.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.recorder.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "recorder.path" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TourCategory;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.monitor.poll_interval_secs, 15);
        assert_eq!(config.logging.level, "info");
        assert!(config.telegram.enabled);
        assert!(!config.recorder.dedupe_rows);
        assert!(!config.monitor.allowed_tournaments.contains(&TourCategory::Itf));
        assert!(config.monitor.allowed_tournaments.contains(&TourCategory::Unknown));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let err = Config::parse_toml("[monitor]\npoll_interval_secs = 0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                ..
            })
        ));
    }

    #[test]
    fn unknown_tournament_fails_parsing() {
        let err = Config::parse_toml("[monitor]\nallowed_tournaments = [\"Davis\"]\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_url_is_missing() {
        let err = Config::parse_toml("[polymarket]\ngamma_api_url = \"\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "polymarket.gamma_api_url"
            })
        ));
    }

    #[test]
    fn allow_list_is_read_verbatim() {
        let config =
            Config::parse_toml("[monitor]\nallowed_tournaments = [\"ITF\", \"ATP\"]\n").unwrap();
        let filter = config.monitor.tournament_filter();
        assert!(filter.is_allowed(TourCategory::Itf));
        assert!(!filter.is_allowed(TourCategory::Wta));
    }
}
