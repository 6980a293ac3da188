use std::io::{self, Write};
use std::sync::Arc;
use tripforce_core::domain::password::Password;
use tripforce_core::domain::salt::Salt;
use tripforce_core::{
    CryptPrimitive, HashError, Matcher, Orchestrator, OutputSink, SearchConfig, SearchQuery,
    ShutdownToken,
};

/// Digest whose tripcode is the password followed by "zz"
struct PasswordEcho;

impl CryptPrimitive for PasswordEcho {
    fn crypt(&self, password: &Password, salt: &Salt) -> Result<Vec<u8>, HashError> {
        let mut digest = Vec::with_capacity(13);
        digest.extend_from_slice(&salt[..2]);
        digest.push(b'.');
        digest.extend_from_slice(password);
        digest.extend_from_slice(b"zz");
        Ok(digest)
    }
}

/// Writer that accepts one byte per call, so an unlocked line would tear
struct ByteWriter(Vec<u8>);

impl Write for ByteWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.first() {
            Some(&b) => {
                self.0.push(b);
                std::thread::yield_now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn assert_well_formed(line: &str) {
    // TRIP: '!<10>' -> PASS: '<8>' @ <rate>
    assert!(line.starts_with("TRIP: '!"), "bad prefix: {:?}", line);
    let trip = &line[8..18];
    assert_eq!(&line[18..30], "' -> PASS: '", "bad separator: {:?}", line);
    let password = &line[30..38];
    assert_eq!(&line[38..42], "' @ ", "bad rate separator: {:?}", line);
    assert!(line.ends_with("Trip/s"), "bad suffix: {:?}", line);

    assert_eq!(&trip[..8], password);
    assert_eq!(&trip[8..], "zz");
}

#[test]
fn every_match_prints_one_intact_line() {
    const WORKERS: usize = 8;
    const ITERATIONS: u64 = 400;

    let sink = Arc::new(OutputSink::new(ByteWriter(Vec::new())));
    let matcher = Matcher::case_sensitive(SearchQuery::parse("zz").unwrap());
    let config = SearchConfig::new(matcher)
        .with_worker_count(WORKERS)
        .with_seed(7)
        .with_iteration_limit(ITERATIONS);

    let report = Orchestrator::new(config, PasswordEcho, Arc::clone(&sink))
        .run(&ShutdownToken::new())
        .unwrap();

    let expected = WORKERS as u64 * ITERATIONS;
    assert_eq!(report.attempts, expected);
    assert_eq!(report.matches, expected);

    let output = sink.with_writer(|w| String::from_utf8(w.0.clone()).unwrap());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len() as u64, expected + 1);

    let (matches, report_line) = lines.split_at(lines.len() - 1);
    for line in matches {
        assert_well_formed(line);
    }
    assert!(report_line[0].starts_with("Final average rate: "));
}

#[test]
fn case_agnostic_matches_regardless_of_case() {
    let sink = Arc::new(OutputSink::new(Vec::new()));
    let matcher = Matcher::case_agnostic(SearchQuery::parse("ZZ").unwrap());
    let config = SearchConfig::new(matcher)
        .with_worker_count(2)
        .with_seed(3)
        .with_iteration_limit(10);

    let report = Orchestrator::new(config, PasswordEcho, Arc::clone(&sink))
        .run(&ShutdownToken::new())
        .unwrap();

    assert_eq!(report.matches, 20);
}
