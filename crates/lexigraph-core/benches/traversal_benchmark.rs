//! Traversal throughput on seeded random undirected graphs.
//!
//! Sizes match the `lexigraph bench` defaults so the two can be compared.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexigraph_core::generate::random_undirected;
use lexigraph_core::traversal::{bfs, dfs, social};

const SIZES: [(usize, usize); 3] = [(1000, 3000), (3000, 12000), (7000, 30000)];
const SEED: u64 = 42;

fn traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for (vertices, edges) in SIZES {
        let graph = random_undirected(vertices, edges, SEED).expect("valid bench size");
        let label = format!("{vertices}v_{edges}e");

        group.bench_with_input(BenchmarkId::new("bfs", &label), &graph, |b, g| {
            b.iter(|| black_box(bfs::run(g, "0")));
        });
        group.bench_with_input(BenchmarkId::new("dfs_recursive", &label), &graph, |b, g| {
            b.iter(|| black_box(dfs::recursive(g, "0")));
        });
        group.bench_with_input(BenchmarkId::new("dfs_iterative", &label), &graph, |b, g| {
            b.iter(|| black_box(dfs::iterative(g, "0")));
        });
    }

    group.finish();
}

fn whole_graph_queries(c: &mut Criterion) {
    let graph = random_undirected(3000, 12000, SEED).expect("valid bench size");

    c.bench_function("connected_components_3000v", |b| {
        b.iter(|| black_box(dfs::connected_components_undirected(&graph)));
    });
    c.bench_function("has_cycle_3000v", |b| {
        b.iter(|| black_box(dfs::has_cycle_undirected(&graph)));
    });
    c.bench_function("social_3000v", |b| {
        b.iter(|| black_box(social::run(&graph, "0", "2999")));
    });
}

fn generation(c: &mut Criterion) {
    c.bench_function("random_undirected_1000v_3000e", |b| {
        b.iter(|| black_box(random_undirected(1000, 3000, SEED)));
    });
}

criterion_group!(benches, traversals, whole_graph_queries, generation);
criterion_main!(benches);
