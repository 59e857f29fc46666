//! Benchmarks for the SCC → topo → DAG path pipeline.
//!
//! Graphs come from the seeded generators so numbers are comparable
//! between runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use critpath_fast::generator::{clustered_sccs, random_mixed};
use critpath_fast::{find_sccs, run_pipeline, topological_sort, Graph, Metrics};

fn build(n: usize, edges: &[critpath_fast::Edge]) -> Graph {
    Graph::try_from_edges(n, edges.iter().copied()).unwrap()
}

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("tarjan_scc");

    for n in [1_000, 10_000, 100_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
        let edges = random_mixed(n, n * 4, n / 10, &mut rng).unwrap();
        let graph = build(n, &edges);

        group.throughput(Throughput::Elements((n + edges.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let mut metrics = Metrics::new();
                black_box(find_sccs(g, &mut metrics))
            })
        });
    }
    group.finish();
}

fn bench_topo_on_condensation(c: &mut Criterion) {
    let mut group = c.benchmark_group("kahn_condensation");

    for n in [1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let edges = clustered_sccs(n, n * 3, n / 20, 10, &mut rng).unwrap();
        let graph = build(n, &edges);
        let scc = find_sccs(&graph, &mut Metrics::new());
        let condensed = scc.condensation(&graph).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &condensed, |b, g| {
            b.iter(|| black_box(topological_sort(g, &mut Metrics::new()).unwrap()))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for n in [1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let edges = random_mixed(n, n * 3, n / 50, &mut rng).unwrap();
        let graph = build(n, &edges);

        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(run_pipeline(g, 0, g.node_count() - 1).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scc, bench_topo_on_condensation, bench_full_pipeline);
criterion_main!(benches);
