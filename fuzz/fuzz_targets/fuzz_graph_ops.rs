//! Fuzz target for graph mutation sequences.
//!
//! Applies arbitrary add/remove operations, then checks the adjacency
//! invariants and runs every traversal.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexigraph_core::traversal::{bfs, dfs, social};
use lexigraph_core::Graph;

#[derive(Arbitrary, Debug)]
enum Op {
    AddVertex(u8),
    AddEdge(u8, u8, Option<i8>),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
}

#[derive(Arbitrary, Debug)]
struct GraphInput {
    directed: bool,
    weighted: bool,
    ops: Vec<Op>,
}

/// Small label space so operations collide often.
fn label(id: u8) -> String {
    (id % 16).to_string()
}

fuzz_target!(|input: GraphInput| {
    let mut graph = if input.directed {
        Graph::directed(input.weighted)
    } else {
        Graph::undirected(input.weighted)
    };

    for op in input.ops.iter().take(512) {
        match *op {
            Op::AddVertex(v) => {
                graph.add_vertex(&label(v)).expect("numeric labels are valid");
            }
            Op::AddEdge(u, v, w) => {
                let weight = w.map(i64::from);
                let result = graph.add_edge(&label(u), &label(v), weight);
                assert_eq!(result.is_ok(), weight.is_some() == input.weighted);
            }
            Op::RemoveEdge(u, v) => {
                graph.remove_edge(&label(u), &label(v));
            }
            Op::RemoveVertex(v) => {
                graph.remove_vertex(&label(v));
            }
        }
    }

    let stored: usize = graph.vertices().iter().map(|v| graph.out_degree(v)).sum();
    assert_eq!(stored, graph.edge_count_stored());
    for (u, edge) in graph.edges() {
        assert!(graph.contains_vertex(edge.to()));
        if !graph.is_directed() {
            assert!(graph.edge(edge.to(), u).is_some());
        }
    }

    for start in graph.vertices() {
        let result = bfs::run(&graph, start);
        for vertex in &result.order {
            assert_eq!(result.path_to(vertex).len(), result.distance[vertex] + 1);
        }
        assert_eq!(dfs::recursive(&graph, start).order, dfs::iterative(&graph, start).order);
        let _ = social::run(&graph, start, "0");
    }
    if !graph.is_directed() {
        let _ = dfs::connected_components_undirected(&graph);
        let _ = dfs::has_cycle_undirected(&graph);
    }
});
