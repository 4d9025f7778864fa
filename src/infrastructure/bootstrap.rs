//! Composition root: wires adapters into the application services.

use std::sync::Arc;

use crate::adapter::outbound::csv::CsvRecorder;
use crate::adapter::outbound::polymarket::PolymarketClient;
use crate::adapter::outbound::sofascore::SofascoreClient;
use crate::application::{MatchPipeline, Monitor, Services};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_notifier;

/// Build the production collaborators.
///
/// # Errors
///
/// Fails when the CSV log cannot be created.
pub fn build_services(config: &Config) -> Result<Services> {
    let recorder = CsvRecorder::open(&config.recorder.path)?;
    Ok(Services {
        feed: Arc::new(SofascoreClient::from_config(&config.sofascore)),
        odds: Arc::new(PolymarketClient::from_config(&config.polymarket)),
        notifier: build_notifier(&config.telegram),
        recorder: Arc::new(recorder),
    })
}

/// Build a monitor around the given collaborators.
#[must_use]
pub fn build_monitor(config: &Config, services: Services) -> Monitor {
    let pipeline = MatchPipeline::new(
        services,
        config.monitor.tournament_filter(),
        config.recorder.dedupe_rows,
    );
    Monitor::new(pipeline, config.monitor.poll_interval())
}
