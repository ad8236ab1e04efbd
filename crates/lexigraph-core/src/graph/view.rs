//! Read-only graph access used by the traversal algorithms.

use super::adjacency::Graph;

/// Read-only view of a graph: vertex membership and ordered adjacency.
///
/// Traversals take `&G where G: GraphView`, so they can never mutate the
/// graph they walk. Implementations must return vertices and neighbors in
/// ascending label order; traversal output is only deterministic under that
/// guarantee.
pub trait GraphView {
    /// Returns true if the vertex exists.
    fn contains_vertex(&self, label: &str) -> bool;

    /// Returns all vertex labels in ascending order.
    fn vertices(&self) -> Vec<&str>;

    /// Returns the destinations of `label`'s outgoing edges in ascending
    /// order, empty for an absent vertex.
    fn neighbors(&self, label: &str) -> Vec<&str>;
}

impl GraphView for Graph {
    fn contains_vertex(&self, label: &str) -> bool {
        Graph::contains_vertex(self, label)
    }

    fn vertices(&self) -> Vec<&str> {
        Graph::vertices(self)
    }

    fn neighbors(&self, label: &str) -> Vec<&str> {
        Graph::neighbors(self, label)
    }
}
