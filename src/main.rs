use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;

use steamlist::logging::init_logging;
use steamlist::processor::run;
use steamlist::types::{Cli, Config, normalize_args};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args()));
    init_logging(cli.verbose);

    // Steam API key is required
    let Some(mut config) = Config::from_cli(&cli) else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if !std::io::stdout().is_terminal() {
        config.colored = false;
    }

    run(&config).await
}
