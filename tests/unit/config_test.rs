//! Unit tests for config module

use std::path::PathBuf;

use sio::display::COLOR_BOLD_ONLY;
use sio::{Config, DisplayMode};

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.display.hex_mode, DisplayMode::Raw);
    assert_eq!(config.display.color, COLOR_BOLD_ONLY);
    assert!(!config.display.timestamp);
    assert_eq!(config.device.baud_rate, 115_200);
    assert!(config.device.port.is_none());
    assert!(!config.log.enabled);
    assert!(config.log.directory.is_none());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.display.hex_mode = DisplayMode::Mix2;
    config.device.port = Some("/dev/ttyACM0".to_string());
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.display.hex_mode, DisplayMode::Mix2);
    assert_eq!(parsed.device.port, config.device.port);
    assert_eq!(parsed.device.baud_rate, config.device.baud_rate);
}

#[test]
fn display_config_parses_from_toml() {
    let toml_str = r#"
[display]
hex_mode = "mix"
color = 0
timestamp = true
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.display.hex_mode, DisplayMode::Mix);
    assert_eq!(config.display.color, 0);
    assert!(config.display.timestamp);
}

#[test]
fn hex_mode_off_means_raw_passthrough() {
    let toml_str = r#"
[display]
hex_mode = "off"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.display.hex_mode, DisplayMode::Raw);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let toml_str = r#"
[device]
baud_rate = 9600
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.device.baud_rate, 9600);
    assert_eq!(config.display.color, COLOR_BOLD_ONLY);
    assert!(!config.log.enabled);
}

#[test]
fn out_of_range_color_fails_validation() {
    let toml_str = r#"
[display]
color = 300
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn in_range_color_passes_validation() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn log_directory_defaults_to_current_dir() {
    let config = Config::default();
    assert_eq!(config.log_directory(), PathBuf::from("."));
}

#[test]
fn log_directory_expands_home_prefix() {
    let mut config = Config::default();
    config.log.directory = Some("~/captures".to_string());
    let dir = config.log_directory();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(dir, home.join("captures"));
    }
}

#[test]
fn log_directory_keeps_absolute_paths() {
    let mut config = Config::default();
    config.log.directory = Some("/var/log/sio".to_string());
    assert_eq!(config.log_directory(), PathBuf::from("/var/log/sio"));
}
