//! sio - Serial I/O viewer library
//!
//! Renders the byte stream from a serial device in raw, hex or mixed
//! display modes, optionally colorized by byte category.

pub mod cli;
pub mod config;
pub mod device;
pub mod display;
pub mod print;
pub mod session;

pub use config::Config;
pub use device::{DeviceError, SerialPort};
pub use display::{ByteFormatter, ColorCategory, ColorPolicy, DisplayMode};
