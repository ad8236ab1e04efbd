//! Graph traversal algorithms over any [`GraphView`](crate::graph::GraphView).
//!
//! - [`bfs`]: level-order traversal with distances, parents and unweighted
//!   shortest paths.
//! - [`dfs`]: recursive and iterative depth-first traversal, connected
//!   components and cycle detection for undirected graphs.
//! - [`social`]: reachability within two hops plus a shortest path, built on
//!   a single BFS.
//!
//! All algorithms are read-only and own their working state, so any number
//! of them may run against the same `&Graph`. An unknown start vertex is not
//! an error: it yields an empty result.

pub mod bfs;
pub mod dfs;
pub mod social;

#[cfg(test)]
mod dfs_tests;

pub use bfs::BfsResult;
pub use dfs::DfsResult;
pub use social::SocialResult;
