//! Tripcode bruteforcer CLI
//!
//! Usage: tripforce [OPTION] "SEARCHSTR"
//!
//! Options:
//!   (None)   No query. Benchmark mode, prints only the hash rate.
//!   -i       Case agnostic search.
//!   -h       Display the help screen.
//!
//! Environment:
//!   TRIPFORCE_THREADS  Number of worker threads (default: logical cores)
//!   TRIPFORCE_SEED     Fixed PRNG seed (default: current time)
//!   RUST_LOG           Log filter for diagnostics on stderr (default: warn)
//!
//! Example: tripforce -i "Tripforce"

use std::env;
use std::ffi::OsString;
use std::io::{self, Stdout};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tripforce_core::{
    Matcher, Orchestrator, OutputSink, QueryError, SearchConfig, SearchQuery, ShutdownController,
    UnixCrypt,
};

const APPLICATION_NAME: &str = "tripforce";
const APPLICATION_DESC: &str = "tripcode bruteforcer for Futaba-style imageboards";
const APPLICATION_AUTHOR: &str =
    "Copyright (C) 2016-2022 microsounds <https://github.com/microsounds>";
const APPLICATION_LICENSE: &str = "GNU General Public License v3";

const THREADS_VAR: &str = "TRIPFORCE_THREADS";
const SEED_VAR: &str = "TRIPFORCE_SEED";

enum Command {
    Help,
    Search(Matcher),
}

fn print_usage() {
    println!("usage:\n\t{} [OPTION] \"SEARCHSTR\"", APPLICATION_NAME);
    println!("help:");
    println!("\t(None)\t No query. Program will only report the tripcode rate.");
    println!("\t-i\t Case agnostic search.");
    println!("\t-h\t Display this help screen.");
}

fn print_splash(worker_count: usize, matcher: &Matcher) {
    println!("{} {} - {}", APPLICATION_NAME, env!("CARGO_PKG_VERSION"), APPLICATION_DESC);
    println!("{}", APPLICATION_AUTHOR);
    println!("Released under the {}.", APPLICATION_LICENSE);
    println!(
        "Utilizing {} thread{}.",
        worker_count,
        if worker_count > 1 { "s" } else { "" }
    );
    if matcher.query().is_none() {
        println!("Running in benchmark mode, send break to stop.");
    } else {
        println!("{}", "-".repeat(64));
    }
}

// A query that is not valid UTF-8 cannot be a tripcode
fn query_arg(arg: Option<&OsString>) -> Result<Option<&str>, QueryError> {
    arg.map(|a| {
        a.to_str()
            .ok_or(QueryError::InvalidCharacter(char::REPLACEMENT_CHARACTER))
    })
    .transpose()
}

fn parse_args(args: &[OsString]) -> Result<Command, String> {
    let Some(first) = args.get(1) else {
        return Ok(Command::Search(Matcher::benchmark()));
    };

    let command = match first.to_str() {
        Some("-h") => return Ok(Command::Help),
        Some("-i") => query_arg(args.get(2))
            .and_then(SearchQuery::from_arg)
            .map(|q| Command::Search(Matcher::case_agnostic(q))),
        _ => query_arg(Some(first))
            .and_then(SearchQuery::from_arg)
            .map(|q| Command::Search(Matcher::case_sensitive(q))),
    };
    command.map_err(|e| e.to_string())
}

fn env_override<T: std::str::FromStr>(name: &str) -> Result<Option<T>, String> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid {} value: {}", name, value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(format!("Invalid {} value: {}", name, e)),
    }
}

fn build_config(matcher: Matcher) -> Result<SearchConfig, String> {
    let mut config = SearchConfig::new(matcher);

    if let Some(threads) = env_override::<usize>(THREADS_VAR)? {
        if threads == 0 {
            return Err(format!("{} must be at least 1", THREADS_VAR));
        }
        config = config.with_worker_count(threads);
    }
    if let Some(seed) = env_override::<u32>(SEED_VAR)? {
        config = config.with_seed(seed);
    }

    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    let args: Vec<OsString> = env::args_os().collect();

    let matcher = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            process::exit(1);
        }
        Ok(Command::Search(matcher)) => matcher,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging();

    let config = build_config(matcher).unwrap_or_else(|e| fail(e));
    print_splash(config.worker_count, &config.matcher);

    let sink: Arc<OutputSink<Stdout>> = Arc::new(OutputSink::new(io::stdout()));
    let token = ShutdownController::new(Arc::clone(&sink))
        .install()
        .unwrap_or_else(|e| fail(e));

    let orchestrator = Orchestrator::new(config, UnixCrypt, sink);
    if let Err(e) = orchestrator.run(&token) {
        fail(e);
    }
}
