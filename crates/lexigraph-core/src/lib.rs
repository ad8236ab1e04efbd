//! # Lexigraph Core
//!
//! Deterministic in-memory graphs over string-labeled vertices.
//!
//! Vertices and adjacency sets are kept in ascending label order, so every
//! traversal (BFS, recursive and iterative DFS, connected components, cycle
//! detection, social reachability) produces the same output for the same
//! graph, every time.
//!
//! ## Features
//!
//! - **Directed or undirected, weighted or unweighted** graphs, fixed at construction
//! - **Logical vs stored edge counts**: undirected edges are stored in both directions
//! - **Read-only traversals** over the [`graph::GraphView`] trait
//! - **Edge-list loader** for the `n m directed weighted` text format
//! - **Seeded random graphs** for benchmarking (`generate` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use lexigraph_core::graph::Graph;
//! use lexigraph_core::traversal::{bfs, dfs, social};
//!
//! fn main() -> lexigraph_core::Result<()> {
//!     let mut graph = Graph::undirected(false);
//!     graph.add_edge("A", "B", None)?;
//!     graph.add_edge("A", "C", None)?;
//!     graph.add_edge("C", "F", None)?;
//!
//!     assert_eq!(bfs::shortest_path_unweighted(&graph, "A", "F"), vec!["A", "C", "F"]);
//!     assert_eq!(dfs::recursive(&graph, "A").order, vec!["A", "B", "C", "F"]);
//!     assert!(!dfs::has_cycle_undirected(&graph));
//!
//!     let reach = social::run(&graph, "B", "F");
//!     assert_eq!(reach.within_distance_2, vec!["A", "C"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod graph;
pub mod io;
pub mod traversal;

pub use config::{
    BenchConfig, BenchRun, ConfigError, LexigraphConfig, LoggingConfig, OutputConfig,
    OutputFormat,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphType, GraphView};
pub use io::{parse_edge_list, read_edge_list, read_edge_list_file};
pub use traversal::{BfsResult, DfsResult, SocialResult};
