//! Symbol registries: lookup tables built in one pass over the tree and
//! read-only afterwards. No edges are produced here.

use ir::{NodeKind, SyntaxTree};
use std::collections::HashMap;

/// Name-keyed declaration lines for the compilation unit.
///
/// All tables are last-write-wins: overloaded methods, same-named
/// classes and multiple constructors of one class collapse to the
/// lexically last declaration. Field names are treated as globally
/// unique. These are named simplifications of the analysis, not bugs.
#[derive(Debug, Default)]
pub struct SymbolRegistries {
    /// Class or interface name → declaration line.
    pub class_decls: HashMap<String, usize>,
    /// Method name → declaration line.
    pub method_decls: HashMap<String, usize>,
    /// Enclosing class name → constructor declaration line.
    pub constructor_decls: HashMap<String, usize>,
    /// Field name → declaration line of its declarator.
    pub field_decls: HashMap<String, usize>,
}

impl SymbolRegistries {
    pub fn build(tree: &SyntaxTree) -> Self {
        let mut registries = SymbolRegistries::default();
        for node in tree.iter() {
            // nodes without a position never enter the analysis
            let Some(line) = node.line else { continue };
            match &node.kind {
                NodeKind::Class { name } => {
                    registries.class_decls.insert(name.clone(), line);
                }
                NodeKind::Method { name } => {
                    registries.method_decls.insert(name.clone(), line);
                }
                NodeKind::Constructor { .. } => {
                    let class = tree
                        .ancestor_where(node.id, |n| matches!(n.kind, NodeKind::Class { .. }))
                        .and_then(|n| match &n.kind {
                            NodeKind::Class { name } => Some(name.clone()),
                            _ => None,
                        })
                        .unwrap_or_default();
                    registries.constructor_decls.insert(class, line);
                }
                NodeKind::VarDecl { name } => {
                    if is_field_declarator(tree, node.id) {
                        registries.field_decls.insert(name.clone(), line);
                    }
                }
                _ => {}
            }
        }
        registries
    }
}

/// A declarator declares a field iff its parent is a field declaration.
pub(crate) fn is_field_declarator(tree: &SyntaxTree, id: ir::NodeId) -> bool {
    matches!(tree.parent(id).map(|p| &p.kind), Some(NodeKind::Field))
}
