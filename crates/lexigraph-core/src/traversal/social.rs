//! Social reachability: who is within two hops of a person, and how to reach
//! a target person.

use serde::Serialize;

use crate::graph::GraphView;

use super::bfs;

/// Maximum hop count for [`SocialResult::within_distance_2`].
pub const SOCIAL_RADIUS: usize = 2;

/// Outcome of a social reachability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialResult {
    /// The queried source vertex.
    pub source: String,
    /// Vertices other than the source at distance 1 or 2, ascending.
    pub within_distance_2: Vec<String>,
    /// Shortest path from source to target inclusive, empty if unreachable.
    pub shortest_path_to_target: Vec<String>,
}

impl SocialResult {
    fn empty(source: &str) -> Self {
        Self {
            source: source.to_string(),
            within_distance_2: Vec::new(),
            shortest_path_to_target: Vec::new(),
        }
    }
}

/// Runs a single BFS from `source` and derives both answers from it.
///
/// If either `source` or `target` is absent both lists are empty.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::graph::Graph;
/// use lexigraph_core::traversal::social;
///
/// let mut graph = Graph::undirected(false);
/// graph.add_edge("A", "B", None).unwrap();
/// graph.add_edge("B", "C", None).unwrap();
/// graph.add_edge("C", "D", None).unwrap();
///
/// let result = social::run(&graph, "A", "D");
/// assert_eq!(result.within_distance_2, vec!["B", "C"]);
/// assert_eq!(result.shortest_path_to_target, vec!["A", "B", "C", "D"]);
/// ```
#[must_use]
pub fn run<'a, G: GraphView + ?Sized>(graph: &'a G, source: &'a str, target: &str) -> SocialResult {
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        return SocialResult::empty(source);
    }

    let reached = bfs::run(graph, source);

    // `distance` is a BTreeMap, so this is already in ascending order.
    let within_distance_2 = reached
        .distance
        .iter()
        .filter(|(vertex, hops)| vertex.as_str() != source && **hops <= SOCIAL_RADIUS)
        .map(|(vertex, _)| vertex.clone())
        .collect();

    SocialResult {
        source: source.to_string(),
        within_distance_2,
        shortest_path_to_target: reached.path_to(target),
    }
}
