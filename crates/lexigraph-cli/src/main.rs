//! Lexigraph command-line driver.
//!
//! Loads edge-list files, runs traversals and prints results as text or JSON.
//! Logs go to stderr so stdout stays machine-readable.

mod bench;
mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lexigraph_core::{LexigraphConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lexigraph")]
#[command(author, version, about = "Deterministic graph traversal over edge-list files", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./lexigraph.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides `output.format`
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through every traversal on the built-in A-F friendship graph
    Demo,

    /// Breadth-first search: visit order, distances and parents
    Bfs {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Start vertex
        #[arg(short, long)]
        start: String,
    },

    /// Depth-first search: visit order and parents
    Dfs {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Start vertex
        #[arg(short, long)]
        start: String,

        /// Use the explicit-stack variant
        #[arg(long)]
        iterative: bool,
    },

    /// Shortest path by hop count
    Path {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Source vertex
        #[arg(long)]
        from: String,

        /// Target vertex
        #[arg(long)]
        to: String,
    },

    /// Connected components of an undirected graph
    Components {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Report whether an undirected graph contains a cycle
    Cycle {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Vertices within two hops of a source, plus a path to a target
    Social {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,

        /// Source vertex
        #[arg(long)]
        source: String,

        /// Target vertex
        #[arg(long)]
        target: String,
    },

    /// Print the adjacency matrix
    Matrix {
        /// Edge-list file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Time BFS and both DFS variants on seeded random graphs
    Bench {
        /// Base seed, overrides `bench.seed`
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration
    Config,
}

fn init_tracing(level: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        LexigraphConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    init_tracing(&config.logging.level.to_ascii_lowercase(), cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting lexigraph");

    commands::run(cli.command, &config)
}
