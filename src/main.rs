//! sio - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use sio::cli::{Cli, Commands};
use sio::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List) => commands::list::handle(),
        Some(Commands::Config(command)) => commands::config::handle(command),
        Some(Commands::Completions { shell }) => commands::completions::handle::<Cli>(*shell),
        None => {
            let config = Config::load()?;
            commands::connect::handle(&cli.connect, &config)
        }
    }
}
