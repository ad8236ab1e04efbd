//! Tests for the Graph adjacency store.

use super::adjacency::Graph;
use super::types::GraphType;
use crate::error::Error;

/// A-B, A-C, B-D, C-D, D-E, E-F, C-F (undirected, unweighted).
fn build_friendship_graph() -> Graph {
    let mut graph = Graph::undirected(false);
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("C", "F"),
    ] {
        graph.add_edge(u, v, None).unwrap();
    }
    graph
}

// ── Vertices ───────────────────────────────────────────────────────

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = Graph::directed(false);
    graph.add_vertex("A").unwrap();
    graph.add_vertex("A").unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.contains_vertex("A"));
    assert!(!graph.contains_vertex("B"));
}

#[test]
fn test_add_vertex_rejects_empty_label() {
    let mut graph = Graph::directed(false);
    assert!(matches!(
        graph.add_vertex(""),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        graph.add_vertex("   "),
        Err(Error::InvalidArgument(_))
    ));
    assert!(graph.is_empty());
}

#[test]
fn test_vertices_are_sorted() {
    let mut graph = Graph::undirected(false);
    for label in ["delta", "alpha", "charlie", "bravo"] {
        graph.add_vertex(label).unwrap();
    }
    assert_eq!(graph.vertices(), vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn test_isolated_vertex_persists() {
    let mut graph = Graph::undirected(false);
    graph.add_edge("A", "B", None).unwrap();
    graph.add_vertex("Z").unwrap();
    graph.remove_edge("A", "B");

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.neighbors("A").is_empty());
    assert!(graph.neighbors("Z").is_empty());
}

#[test]
fn test_neighbors_of_absent_vertex_is_empty() {
    let graph = build_friendship_graph();
    assert!(graph.neighbors("X").is_empty());
    assert_eq!(graph.out_degree("X"), 0);
}

#[test]
fn test_neighbors_are_sorted() {
    let mut graph = Graph::directed(false);
    graph.add_edge("A", "D", None).unwrap();
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("A", "C", None).unwrap();
    assert_eq!(graph.neighbors("A"), vec!["B", "C", "D"]);
}

// ── Edges ──────────────────────────────────────────────────────────

#[test]
fn test_friendship_graph_counts() {
    let graph = build_friendship_graph();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count_logical(), 7);
    assert_eq!(graph.edge_count_stored(), 14);
}

#[test]
fn test_undirected_edge_is_symmetric() {
    let graph = build_friendship_graph();
    for (u, edge) in graph.edges() {
        assert!(
            graph.edge(edge.to(), u).is_some(),
            "missing reverse of {u}->{}",
            edge.to()
        );
    }
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = Graph::directed(false);
    graph.add_edge("A", "B", None).unwrap();
    assert_eq!(graph.neighbors("A"), vec!["B"]);
    assert!(graph.neighbors("B").is_empty());
    assert_eq!(graph.edge_count_stored(), 1);
    assert_eq!(graph.edge_count_logical(), 1);
}

#[test]
fn test_add_edge_creates_endpoints() {
    let mut graph = Graph::directed(false);
    graph.add_edge("A", "B", None).unwrap();
    assert!(graph.contains_vertex("A"));
    assert!(graph.contains_vertex("B"));
}

#[test]
fn test_duplicate_edge_does_not_change_counts() {
    let mut graph = Graph::undirected(false);
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("B", "A", None).unwrap();
    assert_eq!(graph.edge_count_stored(), 2);
    assert_eq!(graph.edge_count_logical(), 1);
}

#[test]
fn test_reinserted_edge_keeps_first_weight() {
    let mut graph = Graph::undirected(true);
    graph.add_edge("A", "B", Some(4)).unwrap();
    graph.add_edge("A", "B", Some(9)).unwrap();

    assert_eq!(graph.edge("A", "B").unwrap().weight(), Some(4));
    assert_eq!(graph.edge("B", "A").unwrap().weight(), Some(4));
    assert_eq!(graph.edge_count_logical(), 1);
}

#[test]
fn test_weighted_graph_requires_weight() {
    let mut graph = Graph::directed(true);
    let result = graph.add_edge("A", "B", None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    // Validation happens before endpoints are created.
    assert!(graph.is_empty());
}

#[test]
fn test_unweighted_graph_rejects_weight() {
    let mut graph = Graph::undirected(false);
    let result = graph.add_edge("A", "B", Some(1));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(graph.edge_count_stored(), 0);
}

#[test]
fn test_add_edge_rejects_empty_label() {
    let mut graph = Graph::undirected(false);
    assert!(graph.add_edge("A", "", None).is_err());
    assert!(graph.add_edge("", "B", None).is_err());
    assert!(graph.is_empty());
}

#[test]
fn test_remove_edge_undirected_removes_both_directions() {
    let mut graph = build_friendship_graph();
    assert!(graph.remove_edge("A", "B"));
    assert!(graph.edge("A", "B").is_none());
    assert!(graph.edge("B", "A").is_none());
    assert_eq!(graph.edge_count_logical(), 6);
    assert_eq!(graph.edge_count_stored(), 12);
}

#[test]
fn test_remove_edge_directed_leaves_reverse() {
    let mut graph = Graph::directed(false);
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("B", "A", None).unwrap();
    assert!(graph.remove_edge("A", "B"));
    assert!(graph.edge("B", "A").is_some());
    assert_eq!(graph.edge_count_stored(), 1);
}

#[test]
fn test_remove_missing_edge_returns_false() {
    let mut graph = build_friendship_graph();
    assert!(!graph.remove_edge("A", "F"));
    assert!(!graph.remove_edge("X", "A"));
    assert_eq!(graph.edge_count_logical(), 7);
}

#[test]
fn test_remove_vertex_cascades_undirected() {
    let mut graph = build_friendship_graph();
    // D touches B, C and E.
    assert!(graph.remove_vertex("D"));
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count_logical(), 4);
    assert_eq!(graph.edge_count_stored(), 8);
    assert!(!graph.neighbors("B").contains(&"D"));
    assert!(!graph.neighbors("E").contains(&"D"));
}

#[test]
fn test_remove_vertex_cascades_directed() {
    let mut graph = Graph::directed(false);
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("B", "C", None).unwrap();
    graph.add_edge("C", "B", None).unwrap();
    graph.add_edge("B", "A", None).unwrap();

    assert!(graph.remove_vertex("B"));
    assert_eq!(graph.edge_count_stored(), 0);
    assert_eq!(graph.vertices(), vec!["A", "C"]);
}

#[test]
fn test_remove_absent_vertex_returns_false() {
    let mut graph = build_friendship_graph();
    assert!(!graph.remove_vertex("X"));
    assert_eq!(graph.vertex_count(), 6);
}

#[test]
fn test_undirected_self_loop_is_stored_once() {
    let mut graph = Graph::undirected(false);
    graph.add_edge("A", "A", None).unwrap();
    assert_eq!(graph.edge_count_stored(), 1);
    assert!(graph.remove_vertex("A"));
    assert_eq!(graph.edge_count_stored(), 0);
}

// ── Matrix export ──────────────────────────────────────────────────

#[test]
fn test_adj_matrix_unweighted() {
    let mut graph = Graph::directed(false);
    graph.add_edge("B", "A", None).unwrap();
    graph.add_edge("A", "C", None).unwrap();

    // Index order: A, B, C
    assert_eq!(
        graph.to_adj_matrix(),
        vec![vec![0, 0, 1], vec![1, 0, 0], vec![0, 0, 0]]
    );
}

#[test]
fn test_adj_matrix_weighted_undirected() {
    let mut graph = Graph::new(GraphType::Undirected, true);
    graph.add_edge("A", "B", Some(7)).unwrap();
    graph.add_edge("B", "C", Some(-2)).unwrap();

    assert_eq!(
        graph.to_adj_matrix(),
        vec![vec![0, 7, 0], vec![7, 0, -2], vec![0, -2, 0]]
    );
}

#[test]
fn test_adj_matrix_empty_graph() {
    let graph = Graph::undirected(false);
    assert!(graph.to_adj_matrix().is_empty());
}

#[test]
fn test_display_summary() {
    let graph = build_friendship_graph();
    assert_eq!(
        graph.to_string(),
        "Graph(undirected, unweighted, V=6, E=7)"
    );
}
