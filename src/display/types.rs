//! Display mode and byte category type definitions

use serde::{Deserialize, Serialize};

/// How incoming bytes are rendered to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Bytes are written to the terminal unmodified.
    #[default]
    #[serde(alias = "off")]
    Raw,
    /// Every byte is rendered as two lowercase hex digits plus a space.
    Hex,
    /// Printable runs are shown literally, everything else as hex tokens.
    Mix,
    /// Like `Mix` but every token is exactly three columns wide.
    Mix2,
}

impl DisplayMode {
    /// The next mode in the runtime cycle order (key command `x`).
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Raw => DisplayMode::Hex,
            DisplayMode::Hex => DisplayMode::Mix,
            DisplayMode::Mix => DisplayMode::Mix2,
            DisplayMode::Mix2 => DisplayMode::Raw,
        }
    }

    /// Short name as used in config files and status output.
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Raw => "raw",
            DisplayMode::Hex => "hex",
            DisplayMode::Mix => "mix",
            DisplayMode::Mix2 => "mix2",
        }
    }
}

/// Color class assigned to a byte for terminal highlighting.
///
/// `None` means no category has been emitted yet; it is never returned by
/// the classifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorCategory {
    #[default]
    None,
    White,
    Green,
    Yellow,
    Blue,
    Red,
}

impl ColorCategory {
    /// Classify a byte. First match wins; the order matters because the
    /// value ranges overlap (NUL and space both map to white, but space
    /// must win over the printable range check).
    pub fn classify(byte: u8) -> Self {
        match byte {
            0x20 => ColorCategory::White,
            0x21..=0x7e => ColorCategory::Green,
            0x09 | 0x0a | 0x0d => ColorCategory::Yellow,
            0x00 => ColorCategory::White,
            0xff => ColorCategory::Blue,
            _ => ColorCategory::Red,
        }
    }
}
