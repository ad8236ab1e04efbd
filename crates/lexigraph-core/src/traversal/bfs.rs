//! Breadth-first search.

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::Serialize;

use crate::graph::GraphView;

/// Outcome of a BFS from a single start vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    /// Vertices in dequeue order.
    pub order: Vec<String>,
    /// Number of edges from the start vertex.
    pub distance: BTreeMap<String, usize>,
    /// Predecessor on a shortest path; the start vertex maps to `None`.
    pub parent: BTreeMap<String, Option<String>>,
}

impl BfsResult {
    /// Returns true if nothing was visited (unknown start vertex).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the start vertex, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Reconstructs the path from the start vertex to `target` by walking
    /// parent pointers.
    ///
    /// Returns an empty path if `target` was not reached or the parent chain
    /// does not lead back to the start vertex.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Vec<String> {
        if !self.distance.contains_key(target) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(vertex) = current {
            // A well-formed parent chain never revisits a vertex.
            if path.len() > self.parent.len() {
                return Vec::new();
            }
            path.push(vertex.to_string());
            current = self.parent.get(vertex).and_then(Option::as_deref);
        }
        path.reverse();

        if path.first().map(String::as_str) == self.source() {
            path
        } else {
            Vec::new()
        }
    }
}

/// Runs BFS from `start`.
///
/// Neighbors are discovered in ascending label order, so the result is
/// deterministic. Returns an empty result if `start` is not in the graph.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::graph::Graph;
/// use lexigraph_core::traversal::bfs;
///
/// let mut graph = Graph::undirected(false);
/// graph.add_edge("A", "C", None).unwrap();
/// graph.add_edge("A", "B", None).unwrap();
///
/// let result = bfs::run(&graph, "A");
/// assert_eq!(result.order, vec!["A", "B", "C"]);
/// assert_eq!(result.parent["C"].as_deref(), Some("A"));
/// assert!(bfs::run(&graph, "Z").is_empty());
/// ```
#[must_use]
pub fn run<'a, G: GraphView + ?Sized>(graph: &'a G, start: &'a str) -> BfsResult {
    let mut result = BfsResult::default();
    if !graph.contains_vertex(start) {
        return result;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

    visited.insert(start);
    result.distance.insert(start.to_string(), 0);
    result.parent.insert(start.to_string(), None);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        result.order.push(current.to_string());

        for next in graph.neighbors(current) {
            if visited.insert(next) {
                result.distance.insert(next.to_string(), depth + 1);
                result
                    .parent
                    .insert(next.to_string(), Some(current.to_string()));
                queue.push_back((next, depth + 1));
            }
        }
    }

    tracing::trace!(start, visited = result.order.len(), "BFS complete");
    result
}

/// Shortest path by edge count from `source` to `target`, both inclusive.
///
/// Returns an empty path if either vertex is absent or `target` is
/// unreachable.
#[must_use]
pub fn shortest_path_unweighted<'a, G: GraphView + ?Sized>(
    graph: &'a G,
    source: &'a str,
    target: &str,
) -> Vec<String> {
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return Vec::new();
    }
    run(graph, source).path_to(target)
}
