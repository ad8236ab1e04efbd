//! Value types stored in a [`Graph`](super::Graph): the directedness marker
//! and the adjacency entry.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Directedness of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    /// Each edge is stored once, from source to destination.
    Directed,
    /// Each edge is stored twice, once in each endpoint's adjacency set.
    Undirected,
}

impl GraphType {
    /// Returns true for [`GraphType::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// An outgoing adjacency entry: destination label plus optional weight.
///
/// Identity is the destination alone. Two edges to the same destination
/// compare equal whatever their weights, so an adjacency set holds at most
/// one edge per destination and re-inserting keeps the first weight.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::graph::Edge;
///
/// let a = Edge::new("B", Some(3));
/// let b = Edge::new("B", Some(9));
/// assert_eq!(a, b);
/// assert_eq!(a.weight(), Some(3));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<i64>,
}

impl Edge {
    /// Creates an edge pointing at `to`.
    #[must_use]
    pub fn new(to: &str, weight: Option<i64>) -> Self {
        Self {
            to: to.to_string(),
            weight,
        }
    }

    /// Returns the destination label.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the weight, `None` on unweighted graphs.
    #[must_use]
    pub fn weight(&self) -> Option<i64> {
        self.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.to == other.to
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to.cmp(&other.to)
    }
}

// Ordering and equality are by destination, so lookups by `&str` agree with
// lookups by `Edge`.
impl Borrow<str> for Edge {
    fn borrow(&self) -> &str {
        &self.to
    }
}
