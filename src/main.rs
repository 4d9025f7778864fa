use std::process::ExitCode;

use clap::Parser;
use courtwatch::adapter::inbound::cli::command::{Cli, Commands};
use courtwatch::adapter::inbound::cli::{chat_id, check, output, run};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Check(args) => check::execute(args),
        Commands::ChatId => chat_id::execute().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
