//! Formatters for the dependency graph in JSON and DOT.
//!
//! JSON is the data contract: an object keyed by decimal line-number
//! strings in ascending numeric order, each value an array of
//! `{"target", "label"}` objects sorted by numeric target, pretty-printed
//! with 2-space indentation. Lines without edges are omitted. DOT is a
//! human-inspection convenience.

use anyhow::{Context, Result};
use ir::DependencyGraph;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supported output formats for the graph document.
pub enum Format {
    Json,
    Dot,
}

pub fn render(graph: &DependencyGraph, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(&to_json(graph)).context("serialize dependency graph")
        }
        Format::Dot => Ok(graph.to_dot()),
    }
}

/// Builds the JSON document. Insertion order is ascending by line, which
/// the order-preserving map carries through to the emitted text; a plain
/// string-keyed map would sort "10" before "9".
fn to_json(graph: &DependencyGraph) -> Value {
    let mut doc = Map::new();
    for (line, deps) in graph.lines() {
        let entries: Vec<Value> = deps
            .iter()
            .map(|dep| {
                json!({
                    "target": dep.target.to_string(),
                    "label": dep.label.label(),
                })
            })
            .collect();
        doc.insert(line.to_string(), Value::Array(entries));
    }
    Value::Object(doc)
}

/// Writes the rendered document in one scoped operation: open, write the
/// full document, close. Failure is surfaced to the caller, not retried.
pub fn write_graph(graph: &DependencyGraph, format: Format, path: &Path) -> Result<()> {
    let rendered = render(graph, format)?;
    fs::write(path, rendered)
        .with_context(|| format!("write dependency graph to {}", path.display()))
}
