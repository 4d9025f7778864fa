//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Live tennis monitor: set-tied, break and tiebreak alerts
#[derive(Parser, Debug)]
#[command(name = "courtwatch")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll live matches until interrupted
    Run(ConfigPathArg),

    /// Validate the configuration file and exit
    Check(ConfigPathArg),

    /// List chats that recently messaged the bot
    ChatId,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
