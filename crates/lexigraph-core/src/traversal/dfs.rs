//! Depth-first search, connected components and undirected cycle detection.
//!
//! [`recursive`] and [`iterative`] produce the same visit order but may
//! disagree on parents. The recursive variant records a vertex's parent when
//! it recurses into it; the iterative variant records it the first time the
//! vertex is pushed and never overwrites it. When a vertex is pushed from
//! several predecessors before being popped, the two parents differ. Both
//! behaviors are kept as-is.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::graph::GraphView;

/// Outcome of a DFS from a single start vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    /// Vertices in pre-order.
    pub order: Vec<String>,
    /// DFS-tree parent; the start vertex maps to `None`.
    pub parent: BTreeMap<String, Option<String>>,
}

impl DfsResult {
    /// Returns true if nothing was visited (unknown start vertex).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Recursive pre-order DFS from `start`, exploring neighbors in ascending
/// label order.
///
/// Returns an empty result if `start` is not in the graph.
#[must_use]
pub fn recursive<'a, G: GraphView + ?Sized>(graph: &'a G, start: &'a str) -> DfsResult {
    let mut result = DfsResult::default();
    if !graph.contains_vertex(start) {
        return result;
    }

    let mut visited = HashSet::new();
    result.parent.insert(start.to_string(), None);
    visit(graph, start, &mut visited, &mut result);

    tracing::trace!(start, visited = result.order.len(), "recursive DFS complete");
    result
}

fn visit<'a, G: GraphView + ?Sized>(
    graph: &'a G,
    current: &'a str,
    visited: &mut HashSet<&'a str>,
    result: &mut DfsResult,
) {
    visited.insert(current);
    result.order.push(current.to_string());

    for next in graph.neighbors(current) {
        if !visited.contains(next) {
            result
                .parent
                .insert(next.to_string(), Some(current.to_string()));
            visit(graph, next, visited, result);
        }
    }
}

/// Iterative DFS from `start` with an explicit stack.
///
/// Neighbors are pushed in descending order so they pop in ascending order,
/// which reproduces the visit order of [`recursive`]. A vertex's parent is
/// the first vertex that pushed it.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::graph::Graph;
/// use lexigraph_core::traversal::dfs;
///
/// let mut graph = Graph::undirected(false);
/// graph.add_edge("A", "B", None).unwrap();
/// graph.add_edge("A", "C", None).unwrap();
/// graph.add_edge("B", "C", None).unwrap();
///
/// let rec = dfs::recursive(&graph, "A");
/// let it = dfs::iterative(&graph, "A");
/// assert_eq!(rec.order, it.order);
/// // C is reached through B when recursing, but A pushed it first.
/// assert_eq!(rec.parent["C"].as_deref(), Some("B"));
/// assert_eq!(it.parent["C"].as_deref(), Some("A"));
/// ```
#[must_use]
pub fn iterative<'a, G: GraphView + ?Sized>(graph: &'a G, start: &'a str) -> DfsResult {
    let mut result = DfsResult::default();
    if !graph.contains_vertex(start) {
        return result;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];
    result.parent.insert(start.to_string(), None);

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        result.order.push(current.to_string());

        for next in graph.neighbors(current).into_iter().rev() {
            if !visited.contains(next) {
                result
                    .parent
                    .entry(next.to_string())
                    .or_insert_with(|| Some(current.to_string()));
                stack.push(next);
            }
        }
    }

    tracing::trace!(start, visited = result.order.len(), "iterative DFS complete");
    result
}

/// Connected components of an undirected graph.
///
/// Seeds are tried in ascending label order; each component is sorted
/// ascending and components are returned in seed order.
///
/// Only meaningful for undirected graphs. On a directed graph this follows
/// out-edges only and returns forward-reachable sets, not strongly or weakly
/// connected components; callers must check directedness first.
#[must_use]
pub fn connected_components_undirected<G: GraphView + ?Sized>(graph: &G) -> Vec<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();

    for seed in graph.vertices() {
        if visited.contains(seed) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![seed];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            component.push(current.to_string());

            for next in graph.neighbors(current).into_iter().rev() {
                if !visited.contains(next) {
                    stack.push(next);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    tracing::trace!(components = components.len(), "connected components complete");
    components
}

/// Returns true if the undirected graph contains a cycle.
///
/// A cycle is a visited neighbor other than the immediate DFS parent. Edges
/// are deduplicated at storage, so parallel edges never count as a cycle; a
/// self-loop does.
///
/// Only meaningful for undirected graphs.
#[must_use]
pub fn has_cycle_undirected<G: GraphView + ?Sized>(graph: &G) -> bool {
    let mut visited = HashSet::new();
    graph
        .vertices()
        .into_iter()
        .any(|start| !visited.contains(start) && has_back_edge(graph, start, None, &mut visited))
}

fn has_back_edge<'a, G: GraphView + ?Sized>(
    graph: &'a G,
    current: &'a str,
    parent: Option<&'a str>,
    visited: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(current);

    for next in graph.neighbors(current) {
        if !visited.contains(next) {
            if has_back_edge(graph, next, Some(current), visited) {
                return true;
            }
        } else if parent != Some(next) {
            return true;
        }
    }
    false
}
