//! xtask - Build tasks for sio
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-man: Generate man pages from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use sio::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for sio")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate man pages from CLI definitions
    #[command(name = "gen-man")]
    GenMan {
        /// Output directory
        #[arg(long, short, default_value = "docs/man")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenMan { output } => gen_man(&output),
    }
}

/// Render the top-level man page and one page per subcommand.
fn gen_man(output: &Path) -> Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {:?}", output))?;

    let cmd = Cli::command();
    write_man_page(cmd.clone(), "sio", output)?;

    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let name = format!("sio-{}", sub.get_name());
        write_man_page(sub.clone().name(name.clone()), &name, output)?;
    }

    println!("Man pages written to {}", output.display());
    Ok(())
}

fn write_man_page(cmd: clap::Command, name: &str, output: &Path) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {}", name))?;

    let path = output.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write man page: {:?}", path))?;
    Ok(())
}
