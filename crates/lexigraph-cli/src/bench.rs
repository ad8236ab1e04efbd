//! Traversal timing over seeded random graphs.

use std::hint::black_box;

use anyhow::Context;
use instant::Instant;
use lexigraph_core::generate::random_undirected;
use lexigraph_core::traversal::{bfs, dfs};
use lexigraph_core::BenchConfig;
use serde::Serialize;

/// CSV header matching [`BenchRow::to_csv`].
pub const CSV_HEADER: &str = "V,E,BFS(ms),DFS-rec(ms),DFS-it(ms)";

const START: &str = "0";

/// Timings for one generated graph.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub vertices: usize,
    pub edges: usize,
    pub bfs_ms: f64,
    pub dfs_recursive_ms: f64,
    pub dfs_iterative_ms: f64,
}

impl BenchRow {
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{:.3},{:.3},{:.3}",
            self.vertices, self.edges, self.bfs_ms, self.dfs_recursive_ms, self.dfs_iterative_ms
        )
    }
}

/// Runs every configured size. Run `i` generates its graph with `seed + i`.
pub fn run(config: &BenchConfig, seed: u64) -> anyhow::Result<Vec<BenchRow>> {
    let mut rows = Vec::with_capacity(config.runs.len());

    for (run, offset) in config.runs.iter().zip(0_u64..) {
        let run_seed = seed.wrapping_add(offset);
        let graph = random_undirected(run.vertices, run.edges, run_seed).with_context(|| {
            format!(
                "Failed to generate graph with {} vertices and {} edges",
                run.vertices, run.edges
            )
        })?;
        tracing::info!(
            vertices = run.vertices,
            edges = run.edges,
            seed = run_seed,
            "Benchmarking traversals"
        );

        rows.push(BenchRow {
            vertices: run.vertices,
            edges: run.edges,
            bfs_ms: time_ms(|| bfs::run(&graph, START)),
            dfs_recursive_ms: time_ms(|| dfs::recursive(&graph, START)),
            dfs_iterative_ms: time_ms(|| dfs::iterative(&graph, START)),
        });
    }

    Ok(rows)
}

/// One untimed warm-up call, then one timed call.
fn time_ms<R>(mut f: impl FnMut() -> R) -> f64 {
    black_box(f());
    let start = Instant::now();
    black_box(f());
    start.elapsed().as_secs_f64() * 1000.0
}
