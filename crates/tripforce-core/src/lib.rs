//! tripforce-core - Tripcode search engine for Futaba-style imageboards
//!
//! This crate provides functionality to:
//! - Generate reproducible password streams from per-worker LCG seeds
//! - Derive Futaba-style salts and tripcodes via traditional DES crypt
//! - Match tripcodes against a validated query, case-sensitive or not
//! - Run the search on all cores with rate telemetry and cooperative shutdown

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::orchestrator::{Orchestrator, SearchConfig, SearchError, SearchReport};
pub use app::shutdown::{ShutdownController, ShutdownToken};
pub use constants::*;
pub use domain::matcher::{MatchMode, Matcher, matches};
pub use domain::prng::{Lcg, derive_worker_seeds};
pub use domain::query::{QueryError, SearchQuery};
pub use domain::rate::{RateTracker, format_rate};
pub use domain::tripcode::{CryptPrimitive, HashError, Tripcode, TripcodeHasher};
pub use infra::crypt::UnixCrypt;
pub use infra::output::OutputSink;
pub use infra::signal::ShutdownError;
