//! Field-access resolution: reads of instance fields resolve to the most
//! recent intra-method assignment, else the owning constructor's
//! assignment, else the field declaration line. Exactly one `data` edge
//! per qualifying read.

use crate::registries::SymbolRegistries;
use ir::{DepKind, DependencyGraph, NodeId, NodeKind, SyntaxTree};
use std::collections::HashMap;

pub(crate) fn add_field_edges(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    graph: &mut DependencyGraph,
) {
    for node in tree.iter() {
        if matches!(node.kind, NodeKind::Method { .. }) {
            resolve_method(tree, registries, node.id, graph);
        }
    }
}

fn resolve_method(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    method: NodeId,
    graph: &mut DependencyGraph,
) {
    // own-field writes, plain forward pass, last write wins — no branch
    // sensitivity here
    let mut assigned: HashMap<String, usize> = HashMap::new();
    for id in tree.descendants(method) {
        let Some(node) = tree.get(id) else { continue };
        let NodeKind::Assign { target } = &node.kind else {
            continue;
        };
        let Some(field) = target.strip_prefix("this.") else {
            continue;
        };
        if !registries.field_decls.contains_key(field) {
            continue;
        }
        let Some(line) = node.line else { continue };
        assigned.insert(field.to_string(), line);
    }

    for id in tree.descendants(method) {
        let Some(node) = tree.get(id) else { continue };
        let NodeKind::Name { ident } = &node.kind else {
            continue;
        };
        let Some(&field_line) = registries.field_decls.get(ident) else {
            continue;
        };
        let Some(usage_line) = node.line else { continue };
        let Some(class_name) = enclosing_class_name(tree, id) else {
            continue;
        };
        if let Some(&assign_line) = assigned.get(ident) {
            graph.add(usage_line, assign_line, DepKind::Data);
        } else if let Some(&ctor_line) = registries.constructor_decls.get(&class_name) {
            // locate the registered constructor by its declaration line;
            // a registered-but-unlocatable constructor yields no edge
            let Some(ctor) = constructor_at(tree, ctor_line) else {
                continue;
            };
            match constructor_assignment(tree, ctor, ident) {
                Some(assign_line) => graph.add(usage_line, assign_line, DepKind::Data),
                None => graph.add(usage_line, field_line, DepKind::Data),
            }
        } else {
            graph.add(usage_line, field_line, DepKind::Data);
        }
    }
}

fn enclosing_class_name(tree: &SyntaxTree, id: NodeId) -> Option<String> {
    tree.ancestor_where(id, |n| matches!(n.kind, NodeKind::Class { .. }))
        .and_then(|n| match &n.kind {
            NodeKind::Class { name } => Some(name.clone()),
            _ => None,
        })
}

fn constructor_at(tree: &SyntaxTree, line: usize) -> Option<NodeId> {
    tree.iter()
        .find(|n| matches!(n.kind, NodeKind::Constructor { .. }) && n.line == Some(line))
        .map(|n| n.id)
}

/// First assignment in the constructor whose target is exactly
/// `this.<field>`.
fn constructor_assignment(tree: &SyntaxTree, ctor: NodeId, field: &str) -> Option<usize> {
    let wanted = format!("this.{field}");
    for id in tree.descendants(ctor) {
        let Some(node) = tree.get(id) else { continue };
        if let NodeKind::Assign { target } = &node.kind {
            if *target == wanted && node.line.is_some() {
                return node.line;
            }
        }
    }
    None
}
