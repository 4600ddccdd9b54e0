//! Status reporting
//!
//! User-visible progress and failure messages are pushed into a [`StatusSink`]
//! instead of a shared label. Closures taking `&str` are sinks too, which keeps
//! tests free of any global capture.

use log::info;

/// Log target used for status messages.
pub const STATUS_TARGET: &str = "jsonmd::status";

/// Receives one status message at a time.
pub trait StatusSink {
    fn report(&mut self, message: &str);
}

impl<F> StatusSink for F
where
    F: FnMut(&str),
{
    fn report(&mut self, message: &str) {
        self(message)
    }
}

/// Writes each message as one line on stderr and logs it at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrStatus;

impl StatusSink for StderrStatus {
    fn report(&mut self, message: &str) {
        info!(target: STATUS_TARGET, "{message}");
        eprintln!("{message}");
    }
}
