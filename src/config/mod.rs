//! Configuration management for sio

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::PathBuf;

impl Config {
    /// Get the config file path (~/.config/sio/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/sio)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Expand ~ in the log directory path, falling back to the current
    /// directory when unset
    pub fn log_directory(&self) -> PathBuf {
        let Some(dir) = &self.log.directory else {
            return PathBuf::from(".");
        };
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }
}
