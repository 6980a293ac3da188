//! Serialized output
//!
//! All workers print through one [`OutputSink`]. A line is written and
//! flushed while the lock is held, so lines from different workers never
//! interleave.

use crate::domain::password::{Password, password_str};
use crate::domain::rate::format_rate;
use crate::domain::tripcode::Tripcode;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Interrupt acknowledgment line
pub const INTERRUPT_ACK: &str = "***Received SIGINT***";

/// Line-atomic writer shared by all workers
#[derive(Debug)]
pub struct OutputSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> OutputSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Write one line and flush it
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    /// Run a closure with exclusive access to the writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.lock();
        f(&mut *writer)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A writer that panicked mid-line leaves nothing worth protecting
    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `TRIP: '!<trip>' -> PASS: '<password>' @ <rate>`
pub fn format_match_line(tripcode: &Tripcode, password: &Password, rate: u64) -> String {
    format!(
        "TRIP: '!{}' -> PASS: '{}' @ {}",
        tripcode,
        password_str(password),
        format_rate(rate)
    )
}

/// `Final average rate: <rate>`
pub fn format_final_report(rate: u64) -> String {
    format!("Final average rate: {}", format_rate(rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_match_line() {
        let trip = Tripcode::from_bytes(*b"nggxhB/yWI");
        assert_eq!(
            format_match_line(&trip, b"pass{|} ", 742),
            "TRIP: '!nggxhB/yWI' -> PASS: 'pass{|} ' @ 742 Trip/s"
        );
        assert_eq!(
            format_match_line(&trip, b"password", 353_100),
            "TRIP: '!nggxhB/yWI' -> PASS: 'password' @ 353.10 kTrip/s"
        );
    }

    #[test]
    fn test_format_final_report() {
        assert_eq!(format_final_report(12), "Final average rate: 12 Trip/s");
        assert_eq!(
            format_final_report(2_000_000),
            "Final average rate: 2.00 mTrip/s"
        );
    }

    #[test]
    fn test_write_line_appends_newline() {
        let sink = OutputSink::new(Vec::new());
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        assert_eq!(sink.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn test_with_writer() {
        let sink = OutputSink::new(Vec::new());
        sink.write_line(INTERRUPT_ACK).unwrap();
        let len = sink.with_writer(|w| w.len());
        assert_eq!(len, INTERRUPT_ACK.len() + 1);
    }
}
