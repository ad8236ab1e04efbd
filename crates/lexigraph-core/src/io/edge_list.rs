//! Plain-text edge-list loader.
//!
//! Format:
//!
//! ```text
//! # comment lines and blank lines are skipped anywhere
//! n m directed weighted      <- header, directed/weighted are 0 or 1
//! u v [w]                    <- exactly m edge lines, w required iff weighted
//! ```
//!
//! Vertices `"0"` through `"n-1"` are created up front so isolated vertices
//! survive. Edge endpoints are arbitrary labels and are created on demand.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphType};

/// Parses an edge list from any buffered reader.
///
/// # Errors
///
/// Returns `Error::Parse` for an empty input, a header with fewer than four
/// fields or non-integer fields, an edge line missing its endpoints or its
/// weight, a non-integer weight, or fewer than `m` edge lines. Read failures
/// surface as `Error::Io`.
///
/// # Example
///
/// ```rust
/// use lexigraph_core::io::read_edge_list;
///
/// let input = "# triangle\n3 3 0 0\n0 1\n1 2\n2 0\n";
/// let graph = read_edge_list(input.as_bytes()).unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count_logical(), 3);
/// ```
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = ContentLines::new(reader);

    let (header_line, header) = lines
        .next_content()?
        .ok_or_else(|| Error::parse(0, "Empty input"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(Error::parse(
            header_line,
            "Header must be: n m directed weighted",
        ));
    }

    let vertex_count: usize = parse_field(fields[0], "vertex count", header_line)?;
    let edge_count: usize = parse_field(fields[1], "edge count", header_line)?;
    let directed = parse_field::<i64>(fields[2], "directed flag", header_line)? == 1;
    let weighted = parse_field::<i64>(fields[3], "weighted flag", header_line)? == 1;

    let graph_type = if directed {
        GraphType::Directed
    } else {
        GraphType::Undirected
    };
    tracing::debug!(
        vertices = vertex_count,
        edges = edge_count,
        %graph_type,
        weighted,
        "Parsed edge-list header"
    );

    let mut graph = Graph::new(graph_type, weighted);
    for i in 0..vertex_count {
        graph.add_vertex(&i.to_string())?;
    }

    let required_fields = if weighted { 3 } else { 2 };
    for loaded in 0..edge_count {
        let Some((line_no, line)) = lines.next_content()? else {
            return Err(Error::parse(
                lines.line_count(),
                format!("Expected {edge_count} edges, got {loaded}"),
            ));
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < required_fields {
            return Err(Error::parse(line_no, format!("Bad edge line: {line}")));
        }

        let weight = if weighted {
            Some(parse_field::<i64>(parts[2], "weight", line_no)?)
        } else {
            None
        };
        tracing::trace!(line = line_no, u = parts[0], v = parts[1], ?weight, "Edge");
        graph.add_edge(parts[0], parts[1], weight)?;
    }

    if let Some((line_no, _)) = lines.next_content()? {
        tracing::warn!(
            line = line_no,
            declared = edge_count,
            "Ignoring content after the declared edge lines"
        );
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count_logical(),
        "Loaded edge list"
    );
    Ok(graph)
}

/// Parses an edge list held in memory.
pub fn parse_edge_list(input: &str) -> Result<Graph> {
    read_edge_list(input.as_bytes())
}

/// Opens and parses an edge-list file.
pub fn read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading edge list");
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file))
}

fn parse_field<T: FromStr>(raw: &str, what: &str, line: usize) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::parse(line, format!("Invalid {what}: {raw:?}")))
}

/// Line iterator that skips blank and `#` lines and tracks line numbers.
struct ContentLines<R> {
    inner: Lines<R>,
    line_count: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_count: 0,
        }
    }

    /// Number of physical lines consumed so far.
    fn line_count(&self) -> usize {
        self.line_count
    }

    /// Next trimmed content line with its 1-based line number.
    fn next_content(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.inner.by_ref() {
            let line = line?;
            self.line_count += 1;
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                return Ok(Some((self.line_count, trimmed.to_string())));
            }
        }
        Ok(None)
    }
}
