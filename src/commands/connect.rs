//! Default connect command: resolve settings and run a console session.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::Local;

use sio::cli::ConnectArgs;
use sio::session::{self, SessionOptions};
use sio::Config;

/// Handle the default (no subcommand) action.
pub fn handle(args: &ConnectArgs, config: &Config) -> Result<()> {
    let options = resolve_options(args, config)?;
    session::run(&options)
}

/// Merge command line arguments over config defaults.
pub(crate) fn resolve_options(args: &ConnectArgs, config: &Config) -> Result<SessionOptions> {
    let device = match args.device.as_ref().or(config.device.port.as_ref()) {
        Some(device) => PathBuf::from(device),
        None => bail!("No device given and no device.port configured (try: sio list)"),
    };

    let mode = match args.hex {
        Some(arg) => arg.into(),
        None => config.display.hex_mode,
    };

    let log_file = resolve_log_file(args, config, &device);

    Ok(SessionOptions {
        baud_rate: args.baud.unwrap_or(config.device.baud_rate),
        mode,
        color: args.color.unwrap_or(config.display.color),
        timestamp: args.timestamp || config.display.timestamp,
        log_file,
        device,
    })
}

fn resolve_log_file(args: &ConnectArgs, config: &Config, device: &Path) -> Option<PathBuf> {
    match &args.log {
        Some(Some(path)) => Some(path.clone()),
        Some(None) => Some(generated_log_path(config, device)),
        None if config.log.enabled => Some(generated_log_path(config, device)),
        None => None,
    }
}

/// Log file name derived from the device name and wall-clock time.
fn generated_log_path(config: &Config, device: &Path) -> PathBuf {
    let stem = device
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "device".to_string());
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    config.log_directory().join(format!("sio-{}-{}.log", stem, stamp))
}
