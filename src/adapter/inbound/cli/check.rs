//! Handler for the `check` command.

use anyhow::Context;

use super::command::ConfigPathArg;
use super::output;
use crate::infrastructure::config::Config;

/// Validate the configuration without starting the monitor.
pub fn execute(args: &ConfigPathArg) -> anyhow::Result<()> {
    let path = &args.config;
    let config =
        Config::load(path).with_context(|| format!("invalid configuration {}", path.display()))?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Poll interval", format!("{}s", config.monitor.poll_interval_secs));
    let tournaments: Vec<&str> = config
        .monitor
        .allowed_tournaments
        .iter()
        .map(|category| category.as_str())
        .collect();
    output::field("Tournaments", tournaments.join(", "));
    output::field("Match log", config.recorder.path.display());
    output::field("Dedupe rows", config.recorder.dedupe_rows);

    if config.telegram.enabled {
        let token = env_present("TELEGRAM_BOT_TOKEN");
        let chat = env_present("TELEGRAM_CHAT_ID");
        if token && chat {
            output::success("Telegram integration configured");
        } else {
            output::warning("Telegram enabled but environment variables are missing");
            if !token {
                output::field("Missing", "TELEGRAM_BOT_TOKEN");
            }
            if !chat {
                output::field("Missing", "TELEGRAM_CHAT_ID");
            }
        }
        if !cfg!(feature = "telegram") {
            output::warning("Built without the telegram feature; alerts will not be delivered");
        }
    } else {
        output::field("Telegram", "disabled");
    }

    Ok(())
}

fn env_present(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| !value.trim().is_empty())
}
