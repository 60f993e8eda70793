//! Dependency-inference engine.
//!
//! Converts a parsed [`ir::SyntaxTree`] into the line-level dependency
//! graph: symbol registries are built once, then each edge-building
//! stage runs independently over the same tree and contributes edges
//! into one shared adjacency structure. The whole analysis is a
//! single-threaded, single-pass approximation keyed by lexical order and
//! line number; it deliberately has no fixpoint iteration, no
//! loop-carried definitions and no inter-procedural resolution beyond
//! name matching.

mod calls;
mod control;
mod defs;
mod fields;
mod registries;
mod scope;

pub use registries::SymbolRegistries;

use ir::{DependencyGraph, SyntaxTree};

/// Runs every inference stage and assembles the dependency graph.
///
/// Infallible by design: unresolved names and nodes without positions
/// degrade into missing edges, never into errors.
pub fn build_graph(tree: &SyntaxTree) -> DependencyGraph {
    let registries = SymbolRegistries::build(tree);
    let mut graph = DependencyGraph::default();

    scope::add_scope_edges(tree, &mut graph);
    defs::add_data_edges(tree, &registries, &mut graph);
    fields::add_field_edges(tree, &registries, &mut graph);
    control::add_control_edges(tree, &mut graph);
    calls::add_call_edges(tree, &registries, &mut graph);

    tracing::debug!(
        vertices = graph.lines().count(),
        edges = graph.edge_count(),
        "dependency graph assembled"
    );
    graph
}

#[cfg(test)]
mod tests;
