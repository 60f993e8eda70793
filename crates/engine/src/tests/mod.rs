use crate::build_graph;
use ir::{DepKind, DependencyGraph, SyntaxTree};


fn parse(source: &str) -> SyntaxTree {
    parsers::parse_java(source, "Test.java").expect("parse fixture")
}

fn graph_of(source: &str) -> DependencyGraph {
    build_graph(&parse(source))
}

fn has_edge(graph: &DependencyGraph, source: usize, target: usize, label: DepKind) -> bool {
    graph
        .edges(source)
        .map_or(false, |deps| deps.iter().any(|d| d.target == target && d.label == label))
}

/// All (target, label) pairs outgoing from `source`, in emission order.
fn edges_at(graph: &DependencyGraph, source: usize) -> Vec<(usize, &'static str)> {
    graph
        .edges(source)
        .map(|deps| deps.iter().map(|d| (d.target, d.label.label())).collect())
        .unwrap_or_default()
}
