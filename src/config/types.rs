//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::display::{DisplayMode, COLOR_BOLD_ONLY};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display mode: "off" (raw passthrough), "hex", "mix" or "mix2"
    #[serde(default)]
    pub hex_mode: DisplayMode,
    /// Color value: 0 disables escapes, 256 is bold-only, 1-255 selects the
    /// ANSI-256 index used for bold status output
    #[serde(default = "default_color")]
    pub color: u16,
    /// Prefix raw output lines with a wall-clock timestamp
    #[serde(default)]
    pub timestamp: bool,
}

fn default_color() -> u16 {
    COLOR_BOLD_ONLY
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hex_mode: DisplayMode::default(),
            color: default_color(),
            timestamp: false,
        }
    }
}

/// Serial device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Baud rate used when none is given on the command line
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Device opened when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

pub fn default_baud_rate() -> u32 {
    115_200
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            baud_rate: default_baud_rate(),
            port: None,
        }
    }
}

/// Session log configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log every session without requiring --log
    #[serde(default)]
    pub enabled: bool,
    /// Directory for generated log files (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Config {
    /// Validate value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.color > COLOR_BOLD_ONLY {
            return Err(format!(
                "display.color must be 0-{}, got {}",
                COLOR_BOLD_ONLY, self.display.color
            ));
        }
        Ok(())
    }
}
