//! List command handler

use std::io::{self, Write};

use anyhow::{Context, Result};

use sio::device::enumerate;
use sio::print;

/// Print discovered serial devices as a two-column table.
pub fn handle() -> Result<()> {
    let devices = enumerate().context("Failed to scan /dev")?;
    if devices.is_empty() {
        println!("No serial devices found");
        return Ok(());
    }

    let max_name = devices
        .iter()
        .map(|d| d.path.display().to_string().len())
        .max()
        .unwrap_or(0);
    let name_width = column_width(max_name);

    let mut out = io::stdout();
    print::padded(&mut out, "DEVICE", name_width, ' ')?;
    writeln!(out, "TYPE")?;
    for entry in &devices {
        print::padded(&mut out, &entry.path.display().to_string(), name_width, ' ')?;
        writeln!(out, "{}", entry.kind)?;
    }
    Ok(())
}

/// Name column width: longest device path plus two, capped to half the
/// terminal so the type column stays visible.
fn column_width(max_name: usize) -> usize {
    let cap = terminal_size::terminal_size()
        .map(|(w, _)| (w.0 as usize) / 2)
        .unwrap_or(40);
    (max_name + 2).min(cap.max(10))
}
