//! Lexical scope edges: every line inside a class or method body depends
//! structurally on the declaring line.

use ir::{DepKind, DependencyGraph, Node, NodeKind, SyntaxTree};

pub(crate) fn add_scope_edges(tree: &SyntaxTree, graph: &mut DependencyGraph) {
    for node in tree.iter() {
        match node.kind {
            NodeKind::Class { .. } => emit(tree, node, DepKind::ClassScope, graph),
            NodeKind::Method { .. } => emit(tree, node, DepKind::MethodScope, graph),
            _ => {}
        }
    }
}

fn emit(tree: &SyntaxTree, decl: &Node, kind: DepKind, graph: &mut DependencyGraph) {
    let Some(decl_line) = decl.line else { return };
    for id in tree.descendants(decl.id) {
        let Some(node) = tree.get(id) else { continue };
        if node.is_comment() {
            continue;
        }
        let Some(line) = node.line else { continue };
        graph.add(line, decl_line, kind);
    }
}
