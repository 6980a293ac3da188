//! Search workflow implementation
//!
//! Runs `worker_count` persistent workers, each looping
//! generate → salt → hash → record → match until shutdown is requested.
//! Workers share nothing but the rate tracker, the output sink and the
//! shutdown token; there is no work queue.

use crate::app::shutdown::ShutdownToken;
use crate::domain::matcher::Matcher;
use crate::domain::password::generate_password;
use crate::domain::prng::{Lcg, derive_worker_seeds};
use crate::domain::rate::{RateTracker, format_rate};
use crate::domain::salt::derive_salt;
use crate::domain::tripcode::{CryptPrimitive, HashError, TripcodeHasher};
use crate::infra::output::{OutputSink, format_final_report, format_match_line};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, error, info};

/// Search errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to start worker threads: {0}")]
    ThreadPool(String),
}

/// Search parameters
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// What counts as a hit
    pub matcher: Matcher,
    /// Number of worker threads (at least 1)
    pub worker_count: usize,
    /// Seed for the seeding generator (None = wall-clock time)
    pub seed: Option<u32>,
    /// Attempts per worker before it stops on its own (None = until shutdown)
    pub iteration_limit: Option<u64>,
}

impl SearchConfig {
    /// Default configuration: one worker per logical core, time seed, no limit
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            worker_count: Self::default_worker_count(),
            seed: None,
            iteration_limit: None,
        }
    }

    pub fn default_worker_count() -> usize {
        num_cpus::get().max(1)
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }
}

/// Totals of a finished search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Tripcodes computed across all workers
    pub attempts: u64,
    /// Match lines printed
    pub matches: u64,
    /// Rate shown in the final report (trips/s)
    pub final_rate: u64,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, Default)]
struct WorkerStats {
    attempts: u64,
    matches: u64,
}

/// Worker pool owner
pub struct Orchestrator<C, W> {
    config: SearchConfig,
    hasher: TripcodeHasher<C>,
    rate: RateTracker,
    sink: Arc<OutputSink<W>>,
}

impl<C, W> Orchestrator<C, W>
where
    C: CryptPrimitive,
    W: Write + Send,
{
    pub fn new(config: SearchConfig, primitive: C, sink: Arc<OutputSink<W>>) -> Self {
        Self {
            config,
            hasher: TripcodeHasher::new(primitive),
            rate: RateTracker::new(),
            sink,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn rate(&self) -> &RateTracker {
        &self.rate
    }

    /// Run the search until shutdown (or the iteration limit)
    ///
    /// After every worker has exited, prints the final rate report once.
    /// A hashing or output failure in any worker stops all of them and is
    /// returned instead of the report.
    pub fn run(&self, shutdown: &ShutdownToken) -> Result<SearchReport, SearchError> {
        let worker_count = self.config.worker_count.max(1);
        let seed = self.config.seed.unwrap_or_else(wall_clock_seed);

        let mut global = Lcg::new(seed);
        let seeds = derive_worker_seeds(&mut global, worker_count);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("tripforce-worker-{}", i))
            .build()
            .map_err(|e| SearchError::ThreadPool(e.to_string()))?;

        info!(
            workers = worker_count,
            seed,
            mode = ?self.config.matcher.mode(),
            "starting search"
        );
        let start = Instant::now();

        let outcomes =
            pool.broadcast(|ctx| self.run_worker(ctx.index(), seeds[ctx.index()], shutdown));

        let mut total = WorkerStats::default();
        let mut failure = None;
        for outcome in outcomes {
            match outcome {
                Ok(stats) => {
                    total.attempts += stats.attempts;
                    total.matches += stats.matches;
                }
                Err(e) => {
                    failure.get_or_insert(e);
                }
            }
        }
        if let Some(e) = failure {
            error!("search aborted: {}", e);
            return Err(e);
        }

        let final_rate = self.rate.current_rate();
        self.sink.write_line(&format_final_report(final_rate))?;

        let report = SearchReport {
            attempts: total.attempts,
            matches: total.matches,
            final_rate,
            elapsed: start.elapsed(),
        };
        info!(
            attempts = report.attempts,
            matches = report.matches,
            rate = %format_rate(report.final_rate),
            "search finished in {:.2}s",
            report.elapsed.as_secs_f64()
        );

        Ok(report)
    }

    fn run_worker(
        &self,
        index: usize,
        seed: u32,
        shutdown: &ShutdownToken,
    ) -> Result<WorkerStats, SearchError> {
        debug!(worker = index, seed, "worker started");

        let mut rng = Lcg::new(seed);
        let mut stats = WorkerStats::default();
        let limit = self.config.iteration_limit.unwrap_or(u64::MAX);

        while !shutdown.is_requested() && stats.attempts < limit {
            let password = generate_password(&mut rng);
            let salt = derive_salt(&password);
            let tripcode = match self.hasher.hash(&password, &salt) {
                Ok(t) => t,
                Err(e) => {
                    shutdown.request();
                    return Err(e.into());
                }
            };

            self.rate.record_attempt();
            stats.attempts += 1;

            if self.config.matcher.is_match(&tripcode) {
                stats.matches += 1;
                let line = format_match_line(&tripcode, &password, self.rate.current_rate());
                if let Err(e) = self.sink.write_line(&line) {
                    shutdown.request();
                    return Err(e.into());
                }
            }
        }

        debug!(
            worker = index,
            attempts = stats.attempts,
            matches = stats.matches,
            "worker stopped"
        );
        Ok(stats)
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}
