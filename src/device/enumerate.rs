//! Candidate serial device discovery for `sio list`.

use std::io;
use std::path::PathBuf;

/// A discovered device node with a human-readable kind.
#[derive(Debug, Clone)]
pub struct DeviceEntry {
    pub path: PathBuf,
    pub kind: &'static str,
}

#[cfg(target_os = "macos")]
const DEV_PREFIXES: &[(&str, &str)] = &[
    ("cu.", "Serial device (callout)"),
    ("tty.", "Serial device (dial-in)"),
];

#[cfg(not(target_os = "macos"))]
const DEV_PREFIXES: &[(&str, &str)] = &[
    ("ttyUSB", "USB serial adapter"),
    ("ttyACM", "USB CDC-ACM device"),
    ("ttyAMA", "Platform UART"),
    ("ttyS", "Platform UART"),
];

/// Kind label for a device file name, if it looks like a serial device.
fn kind_for_name(name: &str) -> Option<&'static str> {
    DEV_PREFIXES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix) && name.len() > prefix.len())
        .map(|(_, kind)| *kind)
}

/// Scan /dev for candidate serial devices, sorted by path.
pub fn enumerate() -> io::Result<Vec<DeviceEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir("/dev")? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(kind) = kind_for_name(name) {
            entries.push(DeviceEntry {
                path: entry.path(),
                kind,
            });
        }
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
