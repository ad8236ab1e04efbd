//! Fuzz target for the edge-list loader.
//!
//! Any input must either load or return an error; loaded graphs must have
//! consistent edge counts.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_edge_list
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexigraph_core::parse_edge_list;

/// Headers may declare vertex counts that would allocate without bound.
const MAX_DECLARED: usize = 10_000;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let oversized = input
        .split_whitespace()
        .filter_map(|token| token.parse::<usize>().ok())
        .any(|n| n > MAX_DECLARED);
    if oversized {
        return;
    }

    if let Ok(graph) = parse_edge_list(input) {
        let stored: usize = graph.vertices().iter().map(|v| graph.out_degree(v)).sum();
        assert_eq!(stored, graph.edge_count_stored());
        assert_eq!(graph.edges().count(), graph.edge_count_stored());
        let matrix = graph.to_adj_matrix();
        assert_eq!(matrix.len(), graph.vertex_count());
    }
});
