//! Cooperative shutdown
//!
//! An interrupt only flips a shared flag. Workers look at the flag once per
//! iteration, so a worker in the middle of a hash always finishes it.

use crate::infra::output::{INTERRUPT_ACK, OutputSink};
use crate::infra::signal::{ShutdownError, on_interrupt};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Shared stop flag
///
/// Monotonic: once requested it stays requested, so relaxed ordering is
/// enough. A worker may run one extra iteration after the request.
#[derive(Clone, Debug, Default)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Request shutdown, returning `true` for the first request only
    pub fn request(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }
}

/// Turns an external interrupt into the shared stop signal
pub struct ShutdownController<W> {
    token: ShutdownToken,
    sink: Arc<OutputSink<W>>,
}

impl<W: Write + Send + 'static> ShutdownController<W> {
    pub fn new(sink: Arc<OutputSink<W>>) -> Self {
        Self {
            token: ShutdownToken::new(),
            sink,
        }
    }

    /// Token observed by the workers
    pub fn token(&self) -> ShutdownToken {
        self.token.clone()
    }

    /// Handle one interrupt
    ///
    /// The first call sets the flag and prints the acknowledgment; later
    /// calls do nothing. The flag is set under the output lock, so the
    /// acknowledgment always precedes the final report.
    pub fn interrupt(&self) -> io::Result<()> {
        self.sink.with_writer(|writer| {
            if !self.token.request() {
                return Ok(());
            }
            info!("interrupt received, stopping workers");
            writeln!(writer, "{}", INTERRUPT_ACK)?;
            writer.flush()
        })
    }

    /// Install the process interrupt handler
    pub fn install(self) -> Result<ShutdownToken, ShutdownError> {
        let token = self.token();
        on_interrupt(move || {
            if let Err(e) = self.interrupt() {
                warn!("failed to print interrupt acknowledgment: {}", e);
            }
        })?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_initially_running() {
        let token = ShutdownToken::new();
        assert!(!token.is_requested());
    }

    #[test]
    fn test_token_request_once() {
        let token = ShutdownToken::new();
        let clone = token.clone();

        assert!(clone.request());
        assert!(!token.request());
        assert!(token.is_requested());
        assert!(clone.is_requested());
    }

    #[test]
    fn test_interrupt_acknowledges_once() {
        let sink = Arc::new(OutputSink::new(Vec::new()));
        let controller = ShutdownController::new(Arc::clone(&sink));
        let token = controller.token();

        controller.interrupt().unwrap();
        controller.interrupt().unwrap();
        controller.interrupt().unwrap();

        assert!(token.is_requested());
        let output = sink.with_writer(|w| String::from_utf8(w.clone()).unwrap());
        assert_eq!(output, format!("{}\n", INTERRUPT_ACK));
    }
}
