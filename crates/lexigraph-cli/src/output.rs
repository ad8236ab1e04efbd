//! Result rendering for the CLI: colored text or pretty JSON.

use std::fmt::Display;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use lexigraph_core::OutputFormat;
use serde::Serialize;

/// Prints command results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_json(self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints `value` as JSON, or hands it to `text` for human output.
    pub fn emit<T: Serialize>(self, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => text(value),
        }
        Ok(())
    }
}

/// Prints `label: value` with the label in bold.
pub fn field(label: &str, value: impl Display) {
    println!("{} {}", format!("{label}:").bold(), value);
}

/// Renders `[A, B, C]`.
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}

/// Renders `A -> C -> F`, or a dimmed placeholder for an empty path.
pub fn path(items: &[String]) -> String {
    if items.is_empty() {
        "(no path)".dimmed().to_string()
    } else {
        items.join(" -> ")
    }
}

/// Builds the adjacency matrix table, labels on both axes.
pub fn matrix_table(labels: &[&str], matrix: &[Vec<i64>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(labels.iter().map(|label| Cell::new(label)));
    table.set_header(header);

    for (label, row) in labels.iter().zip(matrix) {
        let mut cells = vec![Cell::new(label)];
        cells.extend(row.iter().map(|value| Cell::new(value)));
        table.add_row(cells);
    }
    table
}
