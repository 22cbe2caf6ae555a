//! Where outcomes and diagnostics are printed.

use std::fmt;
use std::io::{self, Write};

use log::debug;

use crate::config::COMPLETION_MESSAGE;
use crate::error_handling::InvalidUrl;
use crate::fetch::Outcome;

/// Receives every user-visible line of a run.
///
/// Called concurrently from worker tasks, so implementations must be
/// thread-safe and should write each message as a single line.
pub trait Reporter: Send + Sync + 'static {
    /// One admitted URL finished (success or failure).
    fn outcome(&self, outcome: &Outcome);

    /// A line was rejected by validation and dropped.
    fn invalid_line(&self, error: &InvalidUrl);

    /// Every admitted URL has been processed.
    fn finished(&self);
}

/// Prints outcomes to stdout and validation diagnostics to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn outcome(&self, outcome: &Outcome) {
        emit(io::stdout().lock(), format_args!("{outcome}"));
    }

    fn invalid_line(&self, error: &InvalidUrl) {
        emit(io::stderr().lock(), format_args!("{error}"));
    }

    fn finished(&self) {
        emit(io::stdout().lock(), format_args!("\n{COMPLETION_MESSAGE}"));
    }
}

/// Writes one line. A closed stream (e.g. `| head -1`) is not a run failure.
fn emit(mut out: impl Write, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        debug!("Dropped output line: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut buf = Vec::new();
        emit(&mut buf, format_args!("\n{COMPLETION_MESSAGE}"));
        assert_eq!(buf, b"\nAll urls processed\n");
    }

    #[test]
    fn test_emit_survives_closed_stream() {
        // Must return normally instead of panicking like println!
        emit(ClosedPipe, format_args!("url: http://a.example/ size: 6 bytes time: 1ms"));
    }
}
