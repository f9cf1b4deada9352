//! Status output helpers for the interactive session.
//!
//! The serial stream and sio's own status lines share one terminal, which
//! is usually in raw mode. These helpers keep the two apart: every status
//! line is bold-formatted, `\r\n`-terminated, and preceded by a fresh line
//! break whenever stream output has already dirtied the current line.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use unicode_width::UnicodeWidthStr;

use crate::display::ColorPolicy;

/// Whether anything has been written to the terminal since the last status
/// line. Set by every formatter render and cleared when a status line
/// starts a fresh line.
static OUTPUT_TAINTED: AtomicBool = AtomicBool::new(false);

pub fn output_tainted() -> bool {
    OUTPUT_TAINTED.load(Ordering::Relaxed)
}

pub fn set_output_tainted() {
    OUTPUT_TAINTED.store(true, Ordering::Relaxed);
}

/// Print a timestamped, bold status line to stdout.
pub fn status(policy: &ColorPolicy, message: &str) {
    let mut out = io::stdout();
    let _ = write_status(&mut out, policy, message);
    let _ = out.flush();
}

/// Print a multi-line text block as unprefixed bold lines.
///
/// Used for the key-command listing; splits on `\n` and gives every line
/// raw-mode safe `\r\n` termination.
pub fn block(policy: &ColorPolicy, text: &str) {
    let mut out = io::stdout();
    for line in text.lines() {
        let _ = write_line(&mut out, policy, line);
    }
    let _ = out.flush();
}

/// Write a string padded with `pad` up to `width` display columns.
///
/// Strings already at or beyond the width are written unpadded.
pub fn padded<W: Write>(out: &mut W, text: &str, width: usize, pad: char) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    let mut columns = text.width();
    while columns < width {
        write!(out, "{}", pad)?;
        columns += 1;
    }
    Ok(())
}

pub(crate) fn write_status<W: Write>(
    out: &mut W,
    policy: &ColorPolicy,
    message: &str,
) -> io::Result<()> {
    let stamp = Local::now().format("%H:%M:%S");
    let line = format!("[sio {}] {}", stamp, message);
    write_line(out, policy, &line)
}

fn write_line<W: Write>(out: &mut W, policy: &ColorPolicy, line: &str) -> io::Result<()> {
    if OUTPUT_TAINTED.swap(false, Ordering::Relaxed) {
        out.write_all(b"\r\n")?;
    }
    write!(out, "{}{}{}\r\n", policy.bold(), line, policy.reset())
}
