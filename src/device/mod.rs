//! Serial device access.
//!
//! Opens a device node read/write, puts it into raw 8N1 mode at the
//! requested baud rate and hands out cloneable handles so a reader thread
//! and the key-forwarding writer can share the port.

mod enumerate;

pub use enumerate::{enumerate, DeviceEntry};

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors opening or configuring a serial device.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied opening {path} (is your user in the dialout group?)")]
    PermissionDenied { path: PathBuf },

    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaudRate(u32),

    #[error("Failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to configure {path}: {source}")]
    Configure { path: PathBuf, source: io::Error },
}

/// An open serial device in raw mode.
#[derive(Debug)]
pub struct SerialPort {
    file: File,
    path: PathBuf,
}

impl SerialPort {
    /// Open and configure a device at the given baud rate.
    pub fn open(path: &Path, baud_rate: u32) -> Result<Self, DeviceError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NOCTTY)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => DeviceError::NotFound {
                    path: path.to_path_buf(),
                },
                io::ErrorKind::PermissionDenied => DeviceError::PermissionDenied {
                    path: path.to_path_buf(),
                },
                _ => DeviceError::Open {
                    path: path.to_path_buf(),
                    source: e,
                },
            })?;

        configure_raw(&file, path, baud_rate)?;
        debug!(device = %path.display(), baud_rate, "serial device opened");

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Duplicate the underlying file descriptor so another thread can read
    /// while this handle keeps writing.
    pub fn try_clone(&self) -> io::Result<SerialPort> {
        Ok(SerialPort {
            file: self.file.try_clone()?,
            path: self.path.clone(),
        })
    }
}

impl Read for SerialPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for SerialPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn baud_constant(baud_rate: u32) -> Option<libc::speed_t> {
    let speed = match baud_rate {
        300 => libc::B300,
        600 => libc::B600,
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        #[cfg(target_os = "linux")]
        460800 => libc::B460800,
        #[cfg(target_os = "linux")]
        500000 => libc::B500000,
        #[cfg(target_os = "linux")]
        921600 => libc::B921600,
        #[cfg(target_os = "linux")]
        1000000 => libc::B1000000,
        _ => return None,
    };
    Some(speed)
}

/// Put the device into raw 8N1 mode at the requested speed.
fn configure_raw(file: &File, path: &Path, baud_rate: u32) -> Result<(), DeviceError> {
    let speed = baud_constant(baud_rate).ok_or(DeviceError::UnsupportedBaudRate(baud_rate))?;
    let fd = file.as_raw_fd();

    let mut termios: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
        return Err(DeviceError::Configure {
            path: path.to_path_buf(),
            source: io::Error::last_os_error(),
        });
    }

    unsafe {
        libc::cfmakeraw(&mut termios);
        libc::cfsetispeed(&mut termios, speed);
        libc::cfsetospeed(&mut termios, speed);
    }

    // 8N1, receiver enabled, modem control lines ignored
    termios.c_cflag |= libc::CREAD | libc::CLOCAL;
    // Block until at least one byte is available
    termios.c_cc[libc::VMIN] = 1;
    termios.c_cc[libc::VTIME] = 0;

    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(DeviceError::Configure {
            path: path.to_path_buf(),
            source: io::Error::last_os_error(),
        });
    }

    // Drop anything queued before we were attached
    unsafe { libc::tcflush(fd, libc::TCIOFLUSH) };

    Ok(())
}
