//! Subcommand handlers.
//!
//! Each handler loads its input, runs one core operation and hands the
//! result to [`Printer`].

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use lexigraph_core::traversal::{bfs, dfs, social};
use lexigraph_core::{
    read_edge_list_file, BfsResult, DfsResult, Graph, LexigraphConfig, SocialResult,
};
use serde::Serialize;

use crate::bench::{self, CSV_HEADER};
use crate::output::{self, Printer};
use crate::Commands;

/// The friendship graph used by `demo`.
const FRIENDSHIP_EDGES: [(&str, &str); 7] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("C", "D"),
    ("D", "E"),
    ("E", "F"),
    ("C", "F"),
];

pub fn run(command: Commands, config: &LexigraphConfig) -> Result<()> {
    let printer = Printer::new(config.output.format);

    match command {
        Commands::Demo => cmd_demo(printer),
        Commands::Bfs { file, start } => cmd_bfs(printer, &file, &start),
        Commands::Dfs {
            file,
            start,
            iterative,
        } => cmd_dfs(printer, &file, &start, iterative),
        Commands::Path { file, from, to } => cmd_path(printer, &file, &from, &to),
        Commands::Components { file } => cmd_components(printer, &file),
        Commands::Cycle { file } => cmd_cycle(printer, &file),
        Commands::Social {
            file,
            source,
            target,
        } => cmd_social(printer, &file, &source, &target),
        Commands::Matrix { file } => cmd_matrix(printer, &file),
        Commands::Bench { seed } => cmd_bench(printer, config, seed),
        Commands::Config => cmd_config(printer, config),
    }
}

fn load(file: &Path) -> Result<Graph> {
    let graph = read_edge_list_file(file)
        .with_context(|| format!("Failed to load graph from {}", file.display()))?;
    tracing::info!(path = %file.display(), %graph, "Loaded graph");
    Ok(graph)
}

/// Loads a graph and rejects it if directed.
fn load_undirected(file: &Path, operation: &str) -> Result<Graph> {
    let graph = load(file)?;
    if graph.is_directed() {
        bail!(
            "{operation} requires an undirected graph, but {} is directed",
            file.display()
        );
    }
    Ok(graph)
}

fn parent_of<'a>(parent: &'a BTreeMap<String, Option<String>>, vertex: &str) -> &'a str {
    parent.get(vertex).and_then(Option::as_deref).unwrap_or("-")
}

fn print_parents(parent: &BTreeMap<String, Option<String>>, order: &[String]) {
    for vertex in order {
        println!("  {} <- {}", vertex.green(), parent_of(parent, vertex));
    }
}

fn cmd_bfs(printer: Printer, file: &Path, start: &str) -> Result<()> {
    let graph = load(file)?;
    let result = bfs::run(&graph, start);
    if result.is_empty() {
        tracing::warn!(start, "Start vertex not in graph");
    }

    printer.emit(&result, |result: &BfsResult| {
        output::field("Order", output::list(&result.order));
        println!("{}", "Distance / parent:".bold());
        for vertex in &result.order {
            println!(
                "  {} {} <- {}",
                vertex.green(),
                result.distance.get(vertex).copied().unwrap_or_default(),
                parent_of(&result.parent, vertex)
            );
        }
    })
}

fn cmd_dfs(printer: Printer, file: &Path, start: &str, iterative: bool) -> Result<()> {
    let graph = load(file)?;
    let result = if iterative {
        dfs::iterative(&graph, start)
    } else {
        dfs::recursive(&graph, start)
    };
    if result.is_empty() {
        tracing::warn!(start, "Start vertex not in graph");
    }

    printer.emit(&result, |result: &DfsResult| {
        output::field("Order", output::list(&result.order));
        println!("{}", "Parents:".bold());
        print_parents(&result.parent, &result.order);
    })
}

#[derive(Serialize)]
struct PathReport<'a> {
    from: &'a str,
    to: &'a str,
    path: Vec<String>,
}

fn cmd_path(printer: Printer, file: &Path, from: &str, to: &str) -> Result<()> {
    let graph = load(file)?;
    let report = PathReport {
        from,
        to,
        path: bfs::shortest_path_unweighted(&graph, from, to),
    };

    printer.emit(&report, |report| {
        output::field("Path", output::path(&report.path));
        if !report.path.is_empty() {
            output::field("Hops", report.path.len() - 1);
        }
    })
}

#[derive(Serialize)]
struct ComponentsReport {
    count: usize,
    components: Vec<Vec<String>>,
}

fn cmd_components(printer: Printer, file: &Path) -> Result<()> {
    let graph = load_undirected(file, "components")?;
    let components = dfs::connected_components_undirected(&graph);
    let report = ComponentsReport {
        count: components.len(),
        components,
    };

    printer.emit(&report, |report| {
        output::field("Components", report.count);
        for (i, component) in report.components.iter().enumerate() {
            println!("  {}: {}", i + 1, output::list(component));
        }
    })
}

#[derive(Serialize)]
struct CycleReport {
    has_cycle: bool,
}

fn cmd_cycle(printer: Printer, file: &Path) -> Result<()> {
    let graph = load_undirected(file, "cycle")?;
    let report = CycleReport {
        has_cycle: dfs::has_cycle_undirected(&graph),
    };

    printer.emit(&report, |report| {
        let answer = if report.has_cycle {
            "yes".yellow()
        } else {
            "no".green()
        };
        output::field("Cycle", answer);
    })
}

fn print_social(result: &SocialResult) {
    output::field(
        &format!("Within {} of {}", social::SOCIAL_RADIUS, result.source),
        output::list(&result.within_distance_2),
    );
    output::field("Path", output::path(&result.shortest_path_to_target));
}

fn cmd_social(printer: Printer, file: &Path, source: &str, target: &str) -> Result<()> {
    let graph = load(file)?;
    let result = social::run(&graph, source, target);
    printer.emit(&result, print_social)
}

#[derive(Serialize)]
struct MatrixReport<'a> {
    vertices: Vec<&'a str>,
    matrix: Vec<Vec<i64>>,
}

fn cmd_matrix(printer: Printer, file: &Path) -> Result<()> {
    let graph = load(file)?;
    let report = MatrixReport {
        vertices: graph.vertices(),
        matrix: graph.to_adj_matrix(),
    };

    printer.emit(&report, |report| {
        println!("{}", output::matrix_table(&report.vertices, &report.matrix));
    })
}

fn cmd_bench(printer: Printer, config: &LexigraphConfig, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or(config.bench.seed);
    let rows = bench::run(&config.bench, seed)?;

    printer.emit(&rows, |rows| {
        println!("{CSV_HEADER}");
        for row in rows {
            println!("{}", row.to_csv());
        }
    })
}

fn cmd_config(printer: Printer, config: &LexigraphConfig) -> Result<()> {
    if printer.is_json() {
        return printer.emit(config, |_| {});
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

#[derive(Serialize)]
struct DemoReport {
    graph: String,
    vertices: usize,
    edges: usize,
    bfs_order: Vec<String>,
    path_a_to_f: Vec<String>,
    dfs_recursive: Vec<String>,
    dfs_iterative: Vec<String>,
    components: Vec<Vec<String>>,
    has_cycle: bool,
    social: SocialResult,
}

fn friendship_graph() -> Result<Graph> {
    let mut graph = Graph::undirected(false);
    for (u, v) in FRIENDSHIP_EDGES {
        graph.add_edge(u, v, None)?;
    }
    Ok(graph)
}

fn cmd_demo(printer: Printer) -> Result<()> {
    let graph = friendship_graph()?;
    let report = DemoReport {
        graph: graph.to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count_logical(),
        bfs_order: bfs::run(&graph, "A").order,
        path_a_to_f: bfs::shortest_path_unweighted(&graph, "A", "F"),
        dfs_recursive: dfs::recursive(&graph, "A").order,
        dfs_iterative: dfs::iterative(&graph, "A").order,
        components: dfs::connected_components_undirected(&graph),
        has_cycle: dfs::has_cycle_undirected(&graph),
        social: social::run(&graph, "A", "F"),
    };

    printer.emit(&report, |report| {
        println!("{}", report.graph.bold());
        output::field("Vertices", report.vertices);
        output::field("Edges", report.edges);
        output::field("BFS from A", output::list(&report.bfs_order));
        output::field("Path A to F", output::path(&report.path_a_to_f));
        output::field("DFS recursive", output::list(&report.dfs_recursive));
        output::field("DFS iterative", output::list(&report.dfs_iterative));
        let components: Vec<String> = report.components.iter().map(|c| output::list(c)).collect();
        output::field("Components", components.join(" "));
        output::field("Has cycle", report.has_cycle);
        print_social(&report.social);
    })
}
