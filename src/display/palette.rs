//! ANSI escape sequences for byte categories and status output
//!
//! The category table is fixed; the bold status format is derived once from
//! the configured color value and reused for every status line.

use super::types::ColorCategory;

/// ANSI reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Color value meaning "bold text without a color change".
pub const COLOR_BOLD_ONLY: u16 = 256;

/// Set-color escape for a byte category.
pub fn category_escape(category: ColorCategory) -> &'static str {
    match category {
        ColorCategory::Red => "\x1b[31m",
        ColorCategory::Green => "\x1b[32m",
        ColorCategory::Yellow => "\x1b[33m",
        ColorCategory::Blue => "\x1b[34m",
        ColorCategory::White => "\x1b[37m",
        ColorCategory::None => "",
    }
}

/// Escape strings derived from the configured `color` value.
///
/// `0` disables all escapes, [`COLOR_BOLD_ONLY`] selects plain bold, any
/// other value selects bold with that ANSI-256 foreground index.
#[derive(Debug, Clone)]
pub struct ColorPolicy {
    level: u16,
    bold: String,
}

impl ColorPolicy {
    pub fn new(level: u16) -> Self {
        let bold = match level {
            0 => String::new(),
            COLOR_BOLD_ONLY => "\x1b[1m".to_string(),
            n => format!("\x1b[1;38;5;{}m", n),
        };
        Self { level, bold }
    }

    /// Whether any escape sequences should be emitted at all.
    pub fn enabled(&self) -> bool {
        self.level > 0
    }

    /// Bold format prefix for status lines (empty when disabled).
    pub fn bold(&self) -> &str {
        &self.bold
    }

    /// Reset suffix for status lines (empty when disabled).
    pub fn reset(&self) -> &str {
        if self.level > 0 {
            ANSI_RESET
        } else {
            ""
        }
    }
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::new(COLOR_BOLD_ONLY)
    }
}
