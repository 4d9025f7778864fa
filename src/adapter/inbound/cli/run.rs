//! Handler for the `run` command.

use anyhow::Context;
use tokio::signal;
use tracing::info;

use super::command::ConfigPathArg;
use crate::infrastructure::bootstrap::{build_monitor, build_services};
use crate::infrastructure::config::Config;

/// Load configuration, wire the monitor and poll until Ctrl-C.
pub async fn execute(args: &ConfigPathArg) -> anyhow::Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "courtwatch starting");

    let services = build_services(&config).with_context(|| {
        format!(
            "failed to prepare match log {}",
            config.recorder.path.display()
        )
    })?;
    let mut monitor = build_monitor(&config, services);

    tokio::select! {
        () = monitor.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("courtwatch stopped");
    Ok(())
}
