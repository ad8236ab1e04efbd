//! Tests for DFS traversal, connected components and cycle detection.

use super::dfs::{connected_components_undirected, has_cycle_undirected, iterative, recursive};
use crate::graph::Graph;

fn undirected(edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::undirected(false);
    for &(u, v) in edges {
        graph.add_edge(u, v, None).unwrap();
    }
    graph
}

/// A-B, A-C, B-D, C-D, D-E, E-F, C-F
fn build_friendship_graph() -> Graph {
    undirected(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("C", "F"),
    ])
}

// ── Recursive / iterative ──────────────────────────────────────────

#[test]
fn test_dfs_recursive_friendship_order() {
    let graph = build_friendship_graph();
    let result = recursive(&graph, "A");
    // A -> B -> D -> C -> F -> E
    assert_eq!(result.order, vec!["A", "B", "D", "C", "F", "E"]);
    assert_eq!(result.parent["A"], None);
    assert_eq!(result.parent["D"].as_deref(), Some("B"));
    assert_eq!(result.parent["C"].as_deref(), Some("D"));
    assert_eq!(result.parent["F"].as_deref(), Some("C"));
    assert_eq!(result.parent["E"].as_deref(), Some("F"));
}

#[test]
fn test_dfs_iterative_matches_recursive_order() {
    let graph = build_friendship_graph();
    for start in graph.vertices() {
        assert_eq!(
            recursive(&graph, start).order,
            iterative(&graph, start).order,
            "order mismatch from {start}"
        );
    }
}

#[test]
fn test_dfs_iterative_keeps_first_discovered_parent() {
    let graph = build_friendship_graph();
    let result = iterative(&graph, "A");
    // A pushes C before D is visited; D later pushes C again but the parent
    // recorded at the first push stays.
    assert_eq!(result.parent["C"].as_deref(), Some("A"));
    assert_eq!(recursive(&graph, "A").parent["C"].as_deref(), Some("D"));
}

#[test]
fn test_dfs_is_deterministic() {
    let graph = undirected(&[("A", "B"), ("B", "C"), ("A", "C")]);
    assert_eq!(recursive(&graph, "A"), recursive(&graph, "A"));
    assert_eq!(iterative(&graph, "A"), iterative(&graph, "A"));
}

#[test]
fn test_dfs_unknown_start() {
    let graph = build_friendship_graph();
    assert!(recursive(&graph, "X").is_empty());
    assert!(iterative(&graph, "X").is_empty());
    assert!(recursive(&graph, "X").parent.is_empty());
}

#[test]
fn test_dfs_directed_cycle_terminates() {
    let mut graph = Graph::directed(false);
    graph.add_edge("1", "2", None).unwrap();
    graph.add_edge("2", "3", None).unwrap();
    graph.add_edge("3", "1", None).unwrap();

    assert_eq!(recursive(&graph, "2").order, vec!["2", "3", "1"]);
    assert_eq!(iterative(&graph, "2").order, vec!["2", "3", "1"]);
}

#[test]
fn test_dfs_stays_in_component() {
    let graph = undirected(&[("A", "B"), ("C", "D")]);
    assert_eq!(recursive(&graph, "C").order, vec!["C", "D"]);
}

// ── Connected components ───────────────────────────────────────────

#[test]
fn test_components_disconnected() {
    let graph = undirected(&[("A", "B"), ("C", "D")]);
    let components = connected_components_undirected(&graph);
    assert_eq!(components, vec![vec!["A", "B"], vec!["C", "D"]]);
}

#[test]
fn test_components_connected_graph() {
    let graph = build_friendship_graph();
    let components = connected_components_undirected(&graph);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0], vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_components_include_isolated_vertices() {
    let mut graph = undirected(&[("b", "z"), ("a", "y")]);
    graph.add_vertex("m").unwrap();

    let components = connected_components_undirected(&graph);
    assert_eq!(
        components,
        vec![vec!["a", "y"], vec!["b", "z"], vec!["m"]]
    );
}

#[test]
fn test_components_empty_graph() {
    let graph = Graph::undirected(false);
    assert!(connected_components_undirected(&graph).is_empty());
}

// ── Cycle detection ────────────────────────────────────────────────

#[test]
fn test_cycle_triangle() {
    let graph = undirected(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(has_cycle_undirected(&graph));
}

#[test]
fn test_cycle_friendship_graph() {
    assert!(has_cycle_undirected(&build_friendship_graph()));
}

#[test]
fn test_no_cycle_in_tree() {
    let graph = undirected(&[("A", "B"), ("A", "C"), ("C", "D"), ("C", "E")]);
    assert!(!has_cycle_undirected(&graph));
}

#[test]
fn test_no_cycle_in_forest() {
    let mut graph = undirected(&[("A", "B"), ("C", "D"), ("D", "E")]);
    graph.add_vertex("F").unwrap();
    assert!(!has_cycle_undirected(&graph));
}

#[test]
fn test_parallel_edges_are_not_a_cycle() {
    let graph = undirected(&[("A", "B"), ("B", "A"), ("A", "B")]);
    assert!(!has_cycle_undirected(&graph));
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = undirected(&[("A", "A")]);
    assert!(has_cycle_undirected(&graph));
}

#[test]
fn test_cycle_in_second_component() {
    let graph = undirected(&[("A", "B"), ("X", "Y"), ("Y", "Z"), ("Z", "X")]);
    assert!(has_cycle_undirected(&graph));
}

#[test]
fn test_no_cycle_in_empty_graph() {
    assert!(!has_cycle_undirected(&Graph::undirected(false)));
}
