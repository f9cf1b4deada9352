//! CLI definitions for sio
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use crate::display::DisplayMode;

/// Build clap styles using the status-output colors.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string, including the git SHA for dev builds.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[derive(Parser)]
#[command(name = "sio")]
#[command(about = "[ Serial I/O viewer ] - watch a serial device in raw, hex or mixed display modes")]
#[command(
    long_about = "sio - a serial console viewer.

Connects to a serial device, renders everything the device sends in the
selected display mode, and forwards your keystrokes to the device.

QUICK START:
    sio /dev/ttyUSB0               Open a device at 115200 baud
    sio /dev/ttyUSB0 -b 9600       Open at 9600 baud
    sio /dev/ttyUSB0 --hex mix     Printable text inline, control bytes as hex
    sio list                       Show candidate serial devices

KEY COMMANDS (inside a session, prefix with ctrl-t):
    q    quit
    x    cycle display mode (raw, hex, mix, mix2)
    b    toggle timestamp prefixing
    c    show active configuration
    h    list key commands"
)]
#[command(version = version_string())]
#[command(styles = build_cli_styles())]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub connect: ConnectArgs,
}

/// Arguments for the default connect action (no subcommand).
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Serial device to open (e.g. /dev/ttyUSB0)
    #[arg(help = "Serial device to open (e.g. /dev/ttyUSB0)")]
    pub device: Option<String>,

    /// Baud rate (default from config, initially 115200)
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Hex display mode; bare --hex selects the plain hex dump
    #[arg(
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "hex",
        value_name = "MODE"
    )]
    pub hex: Option<HexModeArg>,

    /// Color value: 0 = off, 1-255 = ANSI-256 index, 256 = bold only
    #[arg(long, value_parser = clap::value_parser!(u16).range(..=256), value_name = "VALUE")]
    pub color: Option<u16>,

    /// Prefix raw output lines with a wall-clock timestamp
    #[arg(short, long)]
    pub timestamp: bool,

    /// Log received bytes to a file (generated name if none is given)
    #[arg(short, long, num_args = 0..=1, value_name = "FILE")]
    pub log: Option<Option<PathBuf>>,
}

/// Hex display modes selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HexModeArg {
    /// Every byte as two hex digits
    Hex,
    /// Printable characters inline, control bytes as hex
    Mix,
    /// Mix with fixed three-column tokens
    Mix2,
}

impl From<HexModeArg> for DisplayMode {
    fn from(arg: HexModeArg) -> Self {
        match arg {
            HexModeArg::Hex => DisplayMode::Hex,
            HexModeArg::Mix => DisplayMode::Mix,
            HexModeArg::Mix2 => DisplayMode::Mix2,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List candidate serial devices
    #[command(long_about = "List candidate serial devices.

Scans /dev for the usual serial device names (ttyUSB*, ttyACM*, ttyS*)
and prints them in a table.

EXAMPLE:
    sio list")]
    List,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    sio completions bash > /etc/bash_completion.d/sio
    sio completions zsh > ~/.zfunc/_sio")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
