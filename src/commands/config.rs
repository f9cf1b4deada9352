//! Config command handlers

use anyhow::{Context, Result};

use sio::cli::ConfigCommands;
use sio::Config;

/// Handle `sio config <subcommand>`.
pub fn handle(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Path => path(),
    }
}

/// Print the active configuration (file values merged over defaults).
fn show() -> Result<()> {
    let config = Config::load()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", rendered);
    Ok(())
}

fn path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
