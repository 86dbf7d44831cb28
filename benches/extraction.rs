//! Benchmarks for tweetscope extraction, selection and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench extraction -- mentions`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tweetscope::Tweet;
use tweetscope::config::LoadConfig;
use tweetscope::core::output::{to_csv, to_json, to_jsonl};
use tweetscope::core::{
    FilterConfig, OutputConfig, apply_filters, containing, get_mentioned_users, get_timespan,
};
use tweetscope::loader::from_jsonl_str;

use chrono::{Duration, TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

const AUTHORS: &[&str] = &["alyssa", "bbitdiddle", "louis-reasoner", "eva_lu_ator"];

fn generate_tweets(count: usize) -> Vec<Tweet> {
    let base_time = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let author = AUTHORS[i % AUTHORS.len()];
            let mention = AUTHORS[(i + 1) % AUTHORS.len()];
            let ts = base_time + Duration::minutes((i as i64 * 7919) % 100_000);
            Tweet::new(
                i as u64,
                author,
                format!("tweet {} for @{} about rivest, mail a@b.com", i, mention),
                ts,
            )
            .unwrap()
        })
        .collect()
}

fn generate_jsonl(count: usize) -> String {
    let mut lines = String::with_capacity(count * 120);
    for i in 0..count {
        lines.push_str(&format!(
            "{{\"id\":{},\"author\":\"{}\",\"text\":\"Message number {} @Alyssa\",\"timestamp\":\"2024-01-15T{:02}:{:02}:00Z\"}}\n",
            i,
            AUTHORS[i % AUTHORS.len()],
            i,
            i % 24,
            i % 60
        ));
    }
    lines
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_timespan(c: &mut Criterion) {
    let mut group = c.benchmark_group("timespan");

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let tweets = generate_tweets(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tweets, |b, tweets| {
            b.iter(|| black_box(get_timespan(black_box(tweets))));
        });
    }
    group.finish();
}

fn bench_mentions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mentions");

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let tweets = generate_tweets(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tweets, |b, tweets| {
            b.iter(|| black_box(get_mentioned_users(black_box(tweets))));
        });
    }
    group.finish();
}

// =============================================================================
// Selection Benchmarks
// =============================================================================

fn bench_containing(c: &mut Criterion) {
    let mut group = c.benchmark_group("containing");
    let words = ["RIVEST", "nothing", "6.031"];

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let tweets = generate_tweets(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tweets, |b, tweets| {
            b.iter(|| black_box(containing(black_box(tweets), &words)));
        });
    }
    group.finish();
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");
    let base_time = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let config = FilterConfig::new()
        .with_author("alyssa")
        .with_after(base_time + Duration::days(10))
        .with_word("rivest");

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let tweets = generate_tweets(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tweets, |b, tweets| {
            b.iter(|| black_box(apply_filters(black_box(tweets), &config)));
        });
    }
    group.finish();
}

// =============================================================================
// Load/Output Benchmarks
// =============================================================================

fn bench_load_jsonl(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_jsonl");
    let config = LoadConfig::new();

    for size in [100_usize, 1_000, 10_000] {
        let jsonl = generate_jsonl(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &jsonl, |b, jsonl| {
            b.iter(|| black_box(from_jsonl_str(black_box(jsonl), &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::default();
    let size = 10_000_usize;
    let tweets = generate_tweets(size);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&tweets), &config).unwrap()));
    });
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&tweets), &config).unwrap()));
    });
    group.bench_function("jsonl", |b| {
        b.iter(|| black_box(to_jsonl(black_box(&tweets), &config).unwrap()));
    });
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_timespan,
    bench_mentions,
    bench_containing,
    bench_apply_filters,
    bench_load_jsonl,
    bench_output,
);

criterion_main!(benches);
