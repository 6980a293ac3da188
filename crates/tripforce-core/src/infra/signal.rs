//! Interrupt hook
//!
//! `ctrlc` runs the handler on its own thread, so the handler may lock the
//! output sink and print.

use thiserror::Error;

/// Interrupt registration errors
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("failed to install interrupt handler: {0}")]
    Handler(String),
}

/// Register the process-wide interrupt handler
///
/// Can only succeed once per process.
pub fn on_interrupt<F>(handler: F) -> Result<(), ShutdownError>
where
    F: FnMut() + Send + 'static,
{
    ctrlc::set_handler(handler).map_err(|e| ShutdownError::Handler(e.to_string()))
}
