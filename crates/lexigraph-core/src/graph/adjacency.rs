//! Ordered adjacency store for string-labeled graphs.
//!
//! Vertices live in a `BTreeMap` and each adjacency set is a `BTreeSet`, so
//! both iterate in ascending label order. Every traversal in
//! [`crate::traversal`] inherits its determinism from this ordering.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use crate::error::{Error, Result};

use super::types::{Edge, GraphType};

/// In-memory graph over string-labeled vertices.
///
/// Directedness and weightedness are fixed at construction. Undirected edges
/// are stored twice (`u→v` and `v→u`), which is why the graph reports both a
/// stored and a logical edge count.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` / `contains_vertex` | \(O(\log V)\) |
/// | `add_edge` / `remove_edge` | \(O(\log V + \log d)\) |
/// | `remove_vertex` | \(O(V \log d)\) |
/// | `neighbors` | \(O(\log V + d)\) |
///
/// # Example
///
/// ```rust
/// use lexigraph_core::graph::{Graph, GraphType};
///
/// let mut graph = Graph::new(GraphType::Undirected, false);
/// graph.add_edge("A", "B", None).unwrap();
/// graph.add_edge("A", "C", None).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count_logical(), 2);
/// assert_eq!(graph.edge_count_stored(), 4);
/// assert_eq!(graph.neighbors("A"), vec!["B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    graph_type: GraphType,
    weighted: bool,
    /// Vertex label -> outgoing edges, both ordered by label.
    adjacency: BTreeMap<String, BTreeSet<Edge>>,
    /// Number of adjacency entries across all vertices.
    edges_stored: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(graph_type: GraphType, weighted: bool) -> Self {
        Self {
            graph_type,
            weighted,
            adjacency: BTreeMap::new(),
            edges_stored: 0,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed(weighted: bool) -> Self {
        Self::new(GraphType::Directed, weighted)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected(weighted: bool) -> Self {
        Self::new(GraphType::Undirected, weighted)
    }

    /// Returns the directedness fixed at construction.
    #[must_use]
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns true if the graph is directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.graph_type.is_directed()
    }

    /// Returns true if every edge carries a weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    // ── Vertices ───────────────────────────────────────────────────────

    /// Adds a vertex with no outgoing edges. Adding an existing vertex is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the label is empty or
    /// whitespace-only.
    pub fn add_vertex(&mut self, label: &str) -> Result<()> {
        validate_label(label)?;
        if !self.adjacency.contains_key(label) {
            self.adjacency.insert(label.to_string(), BTreeSet::new());
        }
        Ok(())
    }

    /// Returns true if the vertex exists.
    #[must_use]
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Returns all vertex labels in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the destinations of `label`'s outgoing edges in ascending
    /// order, or an empty list if the vertex does not exist.
    #[must_use]
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        self.adjacency
            .get(label)
            .map(|edges| edges.iter().map(Edge::to).collect())
            .unwrap_or_default()
    }

    /// Returns the number of outgoing edges, 0 for an absent vertex.
    #[must_use]
    pub fn out_degree(&self, label: &str) -> usize {
        self.adjacency.get(label).map_or(0, BTreeSet::len)
    }

    /// Removes a vertex and every edge incident to it, in both directions.
    ///
    /// Returns false if the vertex does not exist.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        if !self.contains_vertex(label) {
            return false;
        }

        let others: Vec<String> = self
            .adjacency
            .keys()
            .filter(|u| u.as_str() != label)
            .cloned()
            .collect();
        for u in &others {
            self.remove_edge(u, label);
        }

        if let Some(outgoing) = self.adjacency.remove(label) {
            self.edges_stored -= outgoing.len();
        }

        tracing::debug!(
            vertex = label,
            vertices = self.adjacency.len(),
            edges_stored = self.edges_stored,
            "Removed vertex"
        );
        true
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds the edge `u→v` (and `v→u` on undirected graphs), creating both
    /// endpoints if needed.
    ///
    /// An edge to a destination that is already present is left untouched:
    /// the stored weight is the one from the first insertion and the edge
    /// counters do not change.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if a label is empty, if the graph is
    /// weighted and `weight` is `None`, or if the graph is unweighted and
    /// `weight` is `Some`. Validation happens before anything is created.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Option<i64>) -> Result<()> {
        validate_label(u)?;
        validate_label(v)?;
        match (self.weighted, weight) {
            (true, None) => {
                return Err(Error::InvalidArgument(
                    "Weighted graph requires weight".to_string(),
                ))
            }
            (false, Some(_)) => {
                return Err(Error::InvalidArgument(
                    "Unweighted graph must not have weight".to_string(),
                ))
            }
            _ => {}
        }

        self.add_vertex(u)?;
        self.add_vertex(v)?;

        self.insert_stored(u, v, weight);
        if !self.is_directed() {
            self.insert_stored(v, u, weight);
        }
        Ok(())
    }

    /// Removes `u→v` (and `v→u` on undirected graphs).
    ///
    /// Returns true if `u→v` was present. An absent `u` returns false.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        let Some(outgoing) = self.adjacency.get_mut(u) else {
            return false;
        };

        let removed = outgoing.remove(v);
        if removed {
            self.edges_stored -= 1;
        }

        if !self.is_directed() {
            if let Some(back) = self.adjacency.get_mut(v) {
                if back.remove(u) {
                    self.edges_stored -= 1;
                }
            }
        }

        removed
    }

    /// Returns the stored edge `u→v`, if present.
    #[must_use]
    pub fn edge(&self, u: &str, v: &str) -> Option<&Edge> {
        self.adjacency.get(u)?.get(v)
    }

    /// Iterates over all stored edges as `(source, edge)`, ordered by source
    /// then destination. Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &Edge)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(u, edges)| edges.iter().map(move |e| (u.as_str(), e)))
    }

    /// Returns the number of adjacency entries. Undirected edges count twice.
    #[must_use]
    pub fn edge_count_stored(&self) -> usize {
        self.edges_stored
    }

    /// Returns the number of edges as the caller added them: the stored
    /// count on directed graphs, half of it on undirected graphs.
    #[must_use]
    pub fn edge_count_logical(&self) -> usize {
        if self.is_directed() {
            self.edges_stored
        } else {
            self.edges_stored / 2
        }
    }

    /// Exports the graph as an adjacency matrix indexed by ascending vertex
    /// order.
    ///
    /// A cell holds the edge weight on weighted graphs, 1 on unweighted
    /// graphs, and 0 where there is no edge.
    #[must_use]
    pub fn to_adj_matrix(&self) -> Vec<Vec<i64>> {
        let index: HashMap<&str, usize> = self
            .adjacency
            .keys()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        let n = index.len();

        let mut matrix = vec![vec![0; n]; n];
        for (i, edges) in self.adjacency.values().enumerate() {
            for edge in edges {
                if let Some(&j) = index.get(edge.to()) {
                    matrix[i][j] = if self.weighted {
                        edge.weight().unwrap_or_default()
                    } else {
                        1
                    };
                }
            }
        }
        matrix
    }

    fn insert_stored(&mut self, from: &str, to: &str, weight: Option<i64>) {
        let inserted = self
            .adjacency
            .get_mut(from)
            .is_some_and(|edges| edges.insert(Edge::new(to, weight)));
        if inserted {
            self.edges_stored += 1;
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph({}, {}, V={}, E={})",
            self.graph_type,
            if self.weighted { "weighted" } else { "unweighted" },
            self.vertex_count(),
            self.edge_count_logical()
        )
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "Vertex label cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}
