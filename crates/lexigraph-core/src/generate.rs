//! Seeded random graph generation for benchmarks.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Builds an undirected, unweighted graph with vertices `"0".."vertices-1"`
/// and exactly `edges` distinct edges, no self-loops.
///
/// The same `(vertices, edges, seed)` always yields the same graph.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `edges` exceeds the number of distinct
/// vertex pairs, `vertices * (vertices - 1) / 2`.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::generate::random_undirected;
///
/// let graph = random_undirected(100, 250, 42).unwrap();
/// assert_eq!(graph.vertex_count(), 100);
/// assert_eq!(graph.edge_count_logical(), 250);
/// ```
pub fn random_undirected(vertices: usize, edges: usize, seed: u64) -> Result<Graph> {
    let max_edges = vertices.saturating_mul(vertices.saturating_sub(1)) / 2;
    if edges > max_edges {
        return Err(Error::InvalidArgument(format!(
            "Cannot place {edges} distinct edges among {vertices} vertices (max {max_edges})"
        )));
    }

    let mut graph = Graph::undirected(false);
    for i in 0..vertices {
        graph.add_vertex(&i.to_string())?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut used: HashSet<(usize, usize)> = HashSet::with_capacity(edges);
    while used.len() < edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u == v {
            continue;
        }
        if used.insert((u.min(v), u.max(v))) {
            graph.add_edge(&u.to_string(), &v.to_string(), None)?;
        }
    }

    tracing::debug!(vertices, edges, seed, "Generated random undirected graph");
    Ok(graph)
}
