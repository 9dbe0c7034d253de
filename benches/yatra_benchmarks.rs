//! Yatra Benchmarks
//!
//! Benchmarks for the index structures and the search, ranking and routing
//! operations of the travel index, using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion, SamplingMode};
use std::time::Duration;

use yatra_lib::config::YatraConfig;
use yatra_lib::routing::TransportMode;
use yatra_lib::TravelIndex;

fn bundled_index() -> TravelIndex {
    let mut config = YatraConfig::default();
    // Measure the search itself, not the memo
    config.search.cache_capacity = 0;
    TravelIndex::from_config(&config).unwrap()
}

/// Benchmark the lexicon trie
fn bench_lexicon_trie(c: &mut Criterion) {
    use yatra_lib::data_structures::LexiconTrie;

    let mut group = c.benchmark_group("lexicon_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("insert_1000", |b| {
        let keys: Vec<String> = (0..1000).map(|i| format!("destination_{i}")).collect();
        b.iter(|| {
            let mut trie = LexiconTrie::new();
            for (i, key) in keys.iter().enumerate() {
                trie.insert(key, i).unwrap();
            }
            black_box(trie.len())
        });
    });

    group.bench_function("prefix_search", |b| {
        let mut trie = LexiconTrie::new();
        for i in 0..100 {
            for j in 0..10 {
                trie.insert(format!("region_{i}_place_{j}"), j).unwrap();
            }
        }

        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("region_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(trie.search_with_prefix(&prefix));
        });
    });

    group.finish();
}

/// Benchmark the keyed store at different bucket counts
fn bench_keyed_store(c: &mut Criterion) {
    use yatra_lib::data_structures::{KeyedStore, KeyedStoreConfig};

    let mut group = c.benchmark_group("keyed_store");
    group.measurement_time(Duration::from_secs(2));

    for buckets in [16, 100, 1024].iter() {
        group.bench_with_input(BenchmarkId::new("get", buckets), buckets, |b, &buckets| {
            let mut store = KeyedStore::with_config(KeyedStoreConfig::default().with_bucket_count(buckets));
            let keys: Vec<String> = (0..500).map(|i| format!("Place {i}")).collect();
            for (i, key) in keys.iter().enumerate() {
                store.set(key, i).unwrap();
            }

            let mut index = 0;
            b.iter(|| {
                let key = &keys[index % keys.len()];
                index += 1;
                black_box(store.get(key));
            });
        });
    }

    group.finish();
}

/// Benchmark the binary heap priority queue
fn bench_priority_queue(c: &mut Criterion) {
    use yatra_lib::data_structures::PriorityQueue;

    let mut group = c.benchmark_group("priority_queue");
    group.measurement_time(Duration::from_secs(2));

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("enqueue_dequeue", size), size, |b, &size| {
            b.iter(|| {
                let mut queue = PriorityQueue::new();
                for i in 0..size {
                    queue.enqueue(black_box((i * 7919) % size));
                }
                while let Some(item) = queue.dequeue() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the façade operations over the bundled catalog
fn bench_travel_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("travel_index");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));

    group.bench_function("build", |b| {
        b.iter(|| black_box(bundled_index()));
    });

    let index = bundled_index();

    for query in ["goa", "ma", "udaypur"].iter() {
        group.bench_with_input(BenchmarkId::new("search", query), query, |b, query| {
            b.iter(|| black_box(index.search(query, 10)));
        });
    }

    group.bench_function("get_popular", |b| {
        b.iter(|| black_box(index.get_popular(8)));
    });

    group.bench_function("find_route", |b| {
        b.iter(|| black_box(index.find_route("Leh", "Kovalam", None)));
    });

    group.bench_function("find_route_prefer_train", |b| {
        b.iter(|| black_box(index.find_route("Leh", "Kovalam", Some(&TransportMode::Train))));
    });

    group.bench_function("top_activities", |b| {
        b.iter(|| black_box(index.top_activities(10)));
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lexicon_trie, bench_keyed_store, bench_priority_queue, bench_travel_index
}

criterion_main!(benches);
