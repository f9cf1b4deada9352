//! Byte-to-display-token formatter.
//!
//! Turns the raw byte stream arriving from a serial device into styled
//! terminal output. Depending on the display mode a byte becomes a literal
//! character, a two-digit hex token, or a combination of both, optionally
//! wrapped in ANSI color escapes chosen by byte category.
//!
//! One [`ByteFormatter`] owns the state for one stream. Concurrent streams
//! must each hold their own formatter so color and byte history never
//! cross-contaminate.

mod palette;
mod types;

pub use palette::{category_escape, ColorPolicy, ANSI_RESET, COLOR_BOLD_ONLY};
pub use types::{ColorCategory, DisplayMode};

use std::io::{self, Write};

use crate::print;

/// Printable ASCII as far as the mixed renderers are concerned.
///
/// Space counts as printable here (it ends a printable run without forcing
/// a separator); the classifier in [`ColorCategory`] treats it separately.
fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Stateful per-byte formatter for one serial stream.
///
/// Remembers the previous byte (the Mix renderer keys its CRLF and
/// separator rules off it) and the previously emitted color category so
/// that a run of same-category bytes is bracketed by exactly one set-color
/// escape and one reset.
#[derive(Debug)]
pub struct ByteFormatter {
    mode: DisplayMode,
    /// Stream colorization on/off; resolved from the color setting and TTY
    /// detection before the session starts.
    color: bool,
    previous_byte: Option<u8>,
    previous_color: ColorCategory,
}

impl ByteFormatter {
    pub fn new(mode: DisplayMode, color: bool) -> Self {
        Self {
            mode,
            color,
            previous_byte: None,
            previous_color: ColorCategory::None,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switch display mode mid-stream (runtime key command).
    ///
    /// Clears the byte lookback so the first byte after the switch is not
    /// formatted against history from another mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.previous_byte = None;
    }

    /// Render one byte to the sink.
    ///
    /// Raw mode is a pure passthrough and never touches the color or hex
    /// code paths. All other modes classify the byte, emit color escapes
    /// only on category changes, then write the mode's display token.
    pub fn render<W: Write>(&mut self, byte: u8, out: &mut W) -> io::Result<()> {
        print::set_output_tainted();

        if self.mode == DisplayMode::Raw {
            out.write_all(&[byte])?;
            self.previous_byte = Some(byte);
            return Ok(());
        }

        if self.color {
            let category = ColorCategory::classify(byte);
            if category != self.previous_color {
                if self.previous_color != ColorCategory::None {
                    out.write_all(ANSI_RESET.as_bytes())?;
                }
                out.write_all(category_escape(category).as_bytes())?;
                self.previous_color = category;
            }
        }

        match self.mode {
            DisplayMode::Hex => write!(out, "{:02x} ", byte)?,
            DisplayMode::Mix => self.render_mix(byte, out)?,
            DisplayMode::Mix2 => render_mix2(byte, out)?,
            DisplayMode::Raw => unreachable!("raw handled above"),
        }

        self.previous_byte = Some(byte);
        Ok(())
    }

    /// Mix mode: literal printable characters, hex tokens for the rest.
    ///
    /// A single space separates a printable run from a following hex token.
    /// A CRLF pair is rendered twice on purpose, as the hex code of the
    /// newline and as an actual line break, so the viewer sees the raw
    /// bytes without losing the line structure.
    fn render_mix<W: Write>(&self, byte: u8, out: &mut W) -> io::Result<()> {
        let after_printable = self.previous_byte.is_some_and(is_printable);
        if after_printable && !is_printable(byte) {
            out.write_all(b" ")?;
        }

        if byte == 0x20 {
            out.write_all(b"_")
        } else if self.previous_byte == Some(0x0d) && byte == 0x0a {
            write!(out, "{:02x} \r\n", byte)
        } else if is_printable(byte) {
            out.write_all(&[byte])
        } else {
            write!(out, "{:02x} ", byte)
        }
    }

    /// Emit a trailing reset if a category color is still active.
    ///
    /// Called when the stream ends or the mode is switched away from a
    /// colorizing mode, so the terminal is not left mid-color.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.previous_color != ColorCategory::None {
            out.write_all(ANSI_RESET.as_bytes())?;
            self.previous_color = ColorCategory::None;
        }
        Ok(())
    }
}

/// Mix2 mode: fixed three-column tokens, no lookback.
fn render_mix2<W: Write>(byte: u8, out: &mut W) -> io::Result<()> {
    if byte == 0x20 {
        out.write_all(b"__ ")
    } else if is_printable(byte) {
        write!(out, "{}  ", byte as char)
    } else {
        write!(out, "{:02x} ", byte)
    }
}
