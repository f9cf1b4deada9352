//! Signal guard for the interactive session.
//!
//! The session owns the terminal (raw mode) and must unwind cleanly on:
//! - SIGINT (Ctrl+C) via ctrlc handler
//! - SIGHUP (terminal hangup) and SIGTERM via signal_hook
//!
//! All handlers set one flag the session loop polls between chunks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared interrupted flag for one session.
pub struct SessionGuard {
    interrupted: Arc<AtomicBool>,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGuard {
    pub fn new() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register SIGINT, SIGHUP and SIGTERM handlers.
    ///
    /// Safe to call multiple times — duplicate registrations are ignored.
    pub fn register_signal_handlers(&self) {
        let flag = self.interrupted.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .ok(); // Ignore if handler already set

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            let _ = register(libc::SIGHUP, self.interrupted.clone());
            let _ = register(libc::SIGTERM, self.interrupted.clone());
        }
    }

    /// Whether any termination signal has been received.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}
