//! Hash rate telemetry
//!
//! Every worker records every attempt here. The counters are plain relaxed
//! atomics: a fold can lose a few increments racing with another worker, and
//! readers can see a value that is a second old. The numbers are only ever
//! shown to a human.

use crate::constants::{RATE_MAGNITUDE, RATE_PREFIXES};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Rolling trips-per-second estimator
#[derive(Debug, Default)]
pub struct RateTracker {
    /// Attempts seen during the current second
    tally: AtomicU64,
    /// Rolling average, halved towards each finished second
    average: AtomicU64,
    /// Unix second of the last recorded attempt
    last_second: AtomicU64,
}

impl RateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt at the current wall-clock second
    #[inline]
    pub fn record_attempt(&self) {
        self.record_attempt_at(unix_seconds());
    }

    /// Record one attempt at the given second
    ///
    /// When the second changes, the finished tally is folded into the
    /// average as `average / 2 + tally / 2` and the tally restarts at 1.
    /// Only the worker that observes the change performs the fold.
    #[inline]
    pub fn record_attempt_at(&self, second: u64) {
        let previous = self.last_second.swap(second, Ordering::Relaxed);
        if previous != second {
            let tally = self.tally.swap(1, Ordering::Relaxed);
            let average = self.average.load(Ordering::Relaxed);
            let folded = average as f64 / 2.0 + tally as f64 / 2.0;
            self.average.store(folded as u64, Ordering::Relaxed);
        } else {
            self.tally.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current rate in trips/s
    ///
    /// Falls back to the in-progress tally until the first fold produced a
    /// nonzero average.
    pub fn current_rate(&self) -> u64 {
        match self.average.load(Ordering::Relaxed) {
            0 => self.tally.load(Ordering::Relaxed),
            average => average,
        }
    }

    pub fn average(&self) -> u64 {
        self.average.load(Ordering::Relaxed)
    }

    pub fn tally(&self) -> u64 {
        self.tally.load(Ordering::Relaxed)
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Scale a rate to its magnitude prefix
///
/// Returns `None` below 1000, otherwise the scaled value and one of
/// `k`, `m`, `g`, `t`.
pub fn condense_rate(rate: u64) -> Option<(f64, char)> {
    let mut scale = 1u64;
    let mut found = None;

    for &prefix in RATE_PREFIXES.iter() {
        scale = match scale.checked_mul(RATE_MAGNITUDE) {
            Some(s) => s,
            None => break,
        };
        if rate < scale {
            break;
        }
        found = Some((rate as f64 / scale as f64, prefix));
    }

    found
}

/// Format a rate the way match lines and the final report show it
///
/// `"742 Trip/s"`, `"353.10 kTrip/s"`, `"1.20 mTrip/s"`, ...
pub fn format_rate(rate: u64) -> String {
    match condense_rate(rate) {
        Some((value, prefix)) => format!("{:.2} {}Trip/s", value, prefix),
        None => format!("{} Trip/s", rate),
    }
}
