//! Tripcode pipeline benchmarks
//!
//! Small enough to finish in under a minute locally and in CI.

use std::sync::Arc;
use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tripforce_core::domain::password::generate_password;
use tripforce_core::domain::salt::derive_salt;
use tripforce_core::{
    Lcg, Matcher, Orchestrator, OutputSink, SearchConfig, SearchQuery, ShutdownToken,
    TripcodeHasher, Tripcode, UnixCrypt,
};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = Lcg::new(12345);

    group.bench_function("password_and_salt", |b| {
        b.iter(|| {
            let password = generate_password(&mut rng);
            black_box(derive_salt(&password))
        })
    });

    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    let hasher = TripcodeHasher::new(UnixCrypt);

    group.bench_function("unix_crypt", |b| {
        b.iter(|| hasher.hash(black_box(b"password"), black_box(b"asH.")))
    });

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let trip = Tripcode::from_bytes(*b"nggxhB/yWI");
    let query = SearchQuery::parse("hb/Y").unwrap();
    let sensitive = Matcher::case_sensitive(query.clone());
    let agnostic = Matcher::case_agnostic(query);

    group.bench_function("case_sensitive", |b| {
        b.iter(|| sensitive.is_match(black_box(&trip)))
    });
    group.bench_function("case_agnostic", |b| {
        b.iter(|| agnostic.is_match(black_box(&trip)))
    });

    group.finish();
}

fn bench_search_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    group.bench_function("pool_1000_per_worker", |b| {
        b.iter(|| {
            let sink = Arc::new(OutputSink::new(std::io::sink()));
            let config = SearchConfig::new(Matcher::benchmark())
                .with_seed(1)
                .with_iteration_limit(1000);
            Orchestrator::new(config, UnixCrypt, sink).run(&ShutdownToken::new())
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_generate, bench_hash, bench_match, bench_search_pool
}
criterion_main!(benches);
