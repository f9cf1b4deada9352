//! Interactive console session.
//!
//! Wires the serial port, the byte formatter and the local terminal
//! together. A reader thread pumps device bytes through a channel to the
//! single consumer thread that renders them; keyboard events are encoded
//! and written back to the device. The local terminal stays in raw mode
//! for the lifetime of the session.

mod guard;
mod input;

pub use guard::SessionGuard;

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::device::SerialPort;
use crate::display::{ByteFormatter, ColorPolicy, DisplayMode};
use crate::print;

const KEY_COMMAND_HELP: &str = "\
Key commands (prefix with ctrl-t):
  q        quit
  t        send the ctrl-t byte itself
  x        cycle display mode (raw, hex, mix, mix2)
  b        toggle timestamp prefixing
  c        show active configuration
  h or ?   this listing";

/// Resolved settings for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub device: PathBuf,
    pub baud_rate: u32,
    pub mode: DisplayMode,
    pub color: u16,
    pub timestamp: bool,
    pub log_file: Option<PathBuf>,
}

/// Events the reader thread hands to the consumer.
enum PortEvent {
    Data(Vec<u8>),
    Closed,
    Failed(io::Error),
}

/// Why the session loop ended.
enum Outcome {
    Quit,
    Interrupted,
    Disconnected(Option<io::Error>),
}

#[derive(Default)]
struct SessionStats {
    received: u64,
    sent: u64,
}

/// Open the device and run the console until quit, signal or disconnect.
pub fn run(options: &SessionOptions) -> Result<()> {
    let policy = ColorPolicy::new(options.color);
    let colorize = policy.enabled() && atty::is(atty::Stream::Stdout);

    let mut port = SerialPort::open(&options.device, options.baud_rate)?;

    let log = match &options.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {:?}", path))?;
            print::status(&policy, &format!("Logging to {}", path.display()));
            Some(file)
        }
        None => None,
    };

    let guard = SessionGuard::new();
    guard.register_signal_handlers();

    let (tx, rx) = mpsc::channel();
    let reader = port.try_clone().context("Failed to clone device handle")?;
    // Detached on purpose: the thread blocks in read() and only dies with
    // the process or when the descriptor errors out.
    thread::spawn(move || read_loop(reader, tx));

    print::status(
        &policy,
        &format!(
            "Connected to {} at {} baud",
            options.device.display(),
            options.baud_rate
        ),
    );
    print::status(&policy, "Press ctrl-t q to quit, ctrl-t h for key commands");
    debug!(device = %options.device.display(), mode = options.mode.name(), "session started");

    let started = Instant::now();
    crossterm::terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
    let result = session_loop(&guard, &rx, &mut port, options, &policy, colorize, log);
    crossterm::terminal::disable_raw_mode().context("Failed to restore terminal mode")?;

    let (outcome, stats) = result?;
    match outcome {
        Outcome::Quit => print::status(&policy, "Session ended"),
        Outcome::Interrupted => print::status(&policy, "Session interrupted"),
        Outcome::Disconnected(None) => print::status(&policy, "Device disconnected"),
        Outcome::Disconnected(Some(e)) => {
            print::status(&policy, &format!("Device disconnected: {}", e))
        }
    }
    print::status(
        &policy,
        &format!(
            "Received {} bytes, sent {} bytes in {}s",
            stats.received,
            stats.sent,
            started.elapsed().as_secs()
        ),
    );
    debug!("session ended");

    Ok(())
}

fn read_loop(mut port: SerialPort, tx: mpsc::Sender<PortEvent>) {
    use std::io::Read;

    let mut buf = [0u8; 512];
    loop {
        match port.read(&mut buf) {
            Ok(0) => {
                let _ = tx.send(PortEvent::Closed);
                break;
            }
            Ok(n) => {
                if tx.send(PortEvent::Data(buf[..n].to_vec())).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(PortEvent::Failed(e));
                break;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn session_loop(
    guard: &SessionGuard,
    rx: &Receiver<PortEvent>,
    port: &mut SerialPort,
    options: &SessionOptions,
    policy: &ColorPolicy,
    colorize: bool,
    mut log: Option<File>,
) -> Result<(Outcome, SessionStats)> {
    let mut formatter = ByteFormatter::new(options.mode, colorize);
    let mut stdout = io::stdout();
    let mut stats = SessionStats::default();
    let mut timestamp = options.timestamp;
    let mut at_line_start = true;
    let mut pending_command = false;

    let outcome = 'session: loop {
        if guard.is_interrupted() {
            break Outcome::Interrupted;
        }

        // Drain pending key events without blocking.
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if pending_command {
                pending_command = false;
                if let Some(outcome) = key_command(
                    &key,
                    &mut formatter,
                    &mut stdout,
                    &mut timestamp,
                    options,
                    policy,
                    port,
                    &mut stats,
                )? {
                    break 'session outcome;
                }
                continue;
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
                pending_command = true;
                continue;
            }

            if let Some(bytes) = input::encode_key(&key) {
                port.write_all(&bytes).context("Failed to write to device")?;
                stats.sent += bytes.len() as u64;
            }
        }

        // Wait briefly for device data; the timeout keeps the key polling
        // and signal checks responsive.
        match rx.recv_timeout(Duration::from_millis(20)) {
            Ok(PortEvent::Data(chunk)) => {
                stats.received += chunk.len() as u64;
                render_chunk(&mut formatter, &chunk, &mut stdout, timestamp, &mut at_line_start)?;
                if let Some(log) = log.as_mut() {
                    log.write_all(&chunk).context("Failed to write log file")?;
                }
            }
            Ok(PortEvent::Closed) => break Outcome::Disconnected(None),
            Ok(PortEvent::Failed(e)) => break Outcome::Disconnected(Some(e)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Outcome::Disconnected(None),
        }
    };

    formatter.finish(&mut stdout)?;
    stdout.flush()?;
    if let Some(log) = log.as_mut() {
        log.flush().context("Failed to flush log file")?;
    }

    Ok((outcome, stats))
}

/// Handle the key pressed after the ctrl-t prefix.
#[allow(clippy::too_many_arguments)]
fn key_command(
    key: &KeyEvent,
    formatter: &mut ByteFormatter,
    stdout: &mut io::Stdout,
    timestamp: &mut bool,
    options: &SessionOptions,
    policy: &ColorPolicy,
    port: &mut SerialPort,
    stats: &mut SessionStats,
) -> Result<Option<Outcome>> {
    match key.code {
        KeyCode::Char('q') => return Ok(Some(Outcome::Quit)),
        KeyCode::Char('t') => {
            // ctrl-t pressed twice sends the literal byte
            port.write_all(&[0x14]).context("Failed to write to device")?;
            stats.sent += 1;
        }
        KeyCode::Char('x') => {
            formatter.finish(stdout)?;
            let next = formatter.mode().next();
            formatter.set_mode(next);
            print::status(policy, &format!("Display mode: {}", next.name()));
        }
        KeyCode::Char('b') => {
            *timestamp = !*timestamp;
            print::status(
                policy,
                if *timestamp {
                    "Timestamps on"
                } else {
                    "Timestamps off"
                },
            );
        }
        KeyCode::Char('c') => {
            print::status(
                policy,
                &format!(
                    "Device {} at {} baud, display mode {}",
                    options.device.display(),
                    options.baud_rate,
                    formatter.mode().name()
                ),
            );
        }
        KeyCode::Char('h') | KeyCode::Char('?') => print::block(policy, KEY_COMMAND_HELP),
        _ => print::status(policy, "Unknown key command, ctrl-t h lists commands"),
    }
    Ok(None)
}

/// Render one chunk of device bytes, stamping line starts in raw mode.
fn render_chunk(
    formatter: &mut ByteFormatter,
    chunk: &[u8],
    stdout: &mut io::Stdout,
    timestamp: bool,
    at_line_start: &mut bool,
) -> Result<()> {
    for &byte in chunk {
        if timestamp && formatter.mode() == DisplayMode::Raw {
            if *at_line_start && byte != b'\r' && byte != b'\n' {
                let stamp = Local::now().format("%H:%M:%S%.3f");
                write!(stdout, "[{}] ", stamp)?;
            }
            *at_line_start = byte == b'\n';
        }
        formatter.render(byte, stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
