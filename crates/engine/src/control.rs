//! Control dependence edges: every line inside an if branch, for-loop
//! body, try block or catch body depends on the governing
//! condition/compare/try/catch line.

use ir::{DepKind, DependencyGraph, NodeId, NodeKind, SyntaxTree};

pub(crate) fn add_control_edges(tree: &SyntaxTree, graph: &mut DependencyGraph) {
    for node in tree.iter() {
        match node.kind {
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let Some(cond_line) = condition.and_then(|c| tree.line(c)) else {
                    continue;
                };
                for branch in [then_branch, else_branch].into_iter().flatten() {
                    emit_body(tree, branch, cond_line, graph);
                }
            }
            NodeKind::For { compare, body } => {
                // a for-loop without a compare expression governs nothing
                let Some(compare_line) = compare.and_then(|c| tree.line(c)) else {
                    continue;
                };
                if let Some(body) = body {
                    emit_body(tree, body, compare_line, graph);
                }
            }
            NodeKind::Try { block } => {
                let Some(try_line) = node.line else { continue };
                if let Some(block) = block {
                    emit_body(tree, block, try_line, graph);
                }
            }
            NodeKind::Catch { body } => {
                let Some(catch_line) = node.line else { continue };
                if let Some(body) = body {
                    emit_body(tree, body, catch_line, graph);
                }
            }
            _ => {}
        }
    }
}

fn emit_body(tree: &SyntaxTree, root: NodeId, governing_line: usize, graph: &mut DependencyGraph) {
    for id in tree.descendants(root) {
        let Some(node) = tree.get(id) else { continue };
        if node.is_comment() {
            continue;
        }
        let Some(line) = node.line else { continue };
        graph.add(line, governing_line, DepKind::Control);
    }
}
