//! In-memory graph module.
//!
//! Provides the [`Graph`] store, its [`Edge`] and [`GraphType`] value types,
//! and the read-only [`GraphView`] trait that traversal algorithms consume.
//!
//! # Example
//!
//! ```rust
//! use lexigraph_core::graph::Graph;
//! use lexigraph_core::traversal::bfs;
//!
//! let mut graph = Graph::undirected(false);
//! graph.add_edge("A", "B", None).unwrap();
//! graph.add_edge("B", "C", None).unwrap();
//!
//! let result = bfs::run(&graph, "A");
//! assert_eq!(result.order, vec!["A", "B", "C"]);
//! assert_eq!(result.distance["C"], 2);
//! ```

mod adjacency;
mod types;
mod view;

#[cfg(test)]
mod adjacency_tests;

pub use adjacency::Graph;
pub use types::{Edge, GraphType};
pub use view::GraphView;
