//! Infrastructure layer - I/O and external dependencies
//!
//! This module wraps the crypt primitive, terminal output and signal handling.

pub mod crypt;
pub mod output;
pub mod signal;
