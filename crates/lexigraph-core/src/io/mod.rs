//! Graph input formats.
//!
//! Only the plain-text edge list is supported. The loader builds graphs
//! exclusively through [`Graph::add_vertex`](crate::graph::Graph::add_vertex)
//! and [`Graph::add_edge`](crate::graph::Graph::add_edge).

mod edge_list;


pub use edge_list::{parse_edge_list, read_edge_list, read_edge_list_file};
