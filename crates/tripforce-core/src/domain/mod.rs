//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod matcher;
pub mod password;
pub mod prng;
pub mod query;
pub mod rate;
pub mod salt;
pub mod tripcode;
