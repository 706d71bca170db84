mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, watch};
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = match commands.to_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print::header("lanwatch");
    print::config_summary(&cfg);

    match commands.active_command() {
        Commands::Watch => watch::watch(cfg).await,
        Commands::Check => check::check(cfg).await,
    }
}
