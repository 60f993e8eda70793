//! Call and construction coupling: instantiation and constructor edges
//! for object creations, call/parameter-in edges for invocations of
//! declared methods, data edges for argument flow, and back-propagated
//! parameter-out edges from call sites to the callee's returns.

use crate::defs;
use crate::registries::SymbolRegistries;
use ir::{DepKind, DependencyGraph, NodeKind, SyntaxTree};

pub(crate) fn add_call_edges(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    graph: &mut DependencyGraph,
) {
    for node in tree.iter() {
        match &node.kind {
            NodeKind::New { type_name } => {
                let Some(line) = node.line else { continue };
                // the two resolutions are independent; either may fire alone
                if let Some(&class_line) = registries.class_decls.get(type_name) {
                    graph.add(line, class_line, DepKind::ClassInstantiation);
                }
                if let Some(&ctor_line) = registries.constructor_decls.get(type_name) {
                    graph.add(line, ctor_line, DepKind::ConstructorCall);
                }
            }
            NodeKind::Call { name, args } => {
                let Some(call_line) = node.line else { continue };
                // calls to undeclared names produce no edges at all
                let Some(&method_line) = registries.method_decls.get(name) else {
                    continue;
                };
                if call_line == method_line {
                    continue;
                }
                if args.is_empty() {
                    graph.add(call_line, method_line, DepKind::Call);
                } else {
                    graph.add(call_line, method_line, DepKind::ParameterIn);
                }

                let Some(enclosing) = tree
                    .ancestor_where(node.id, |n| matches!(n.kind, NodeKind::Method { .. }))
                else {
                    continue;
                };
                // which definition of each argument variable flows into
                // the call: the reaching-definitions scan, cut off at the
                // call site's line
                let reaching =
                    defs::definitions_before(tree, registries, enclosing.id, call_line);
                for &arg in args {
                    for id in tree.descendants(arg) {
                        let Some(NodeKind::Name { ident }) =
                            tree.get(id).map(|n| &n.kind)
                        else {
                            continue;
                        };
                        let Some(def_lines) = reaching.get(ident) else {
                            continue;
                        };
                        for &def in def_lines {
                            graph.add(call_line, def, DepKind::Data);
                        }
                    }
                }
            }
            NodeKind::Return => {
                let Some(return_line) = node.line else { continue };
                let Some(method) = tree
                    .ancestor_where(node.id, |n| matches!(n.kind, NodeKind::Method { .. }))
                else {
                    continue;
                };
                let NodeKind::Method { name } = &method.kind else {
                    continue;
                };
                // the caller's result depends on what is returned,
                // whether or not the result is used
                for call in tree.iter() {
                    let NodeKind::Call { name: callee, .. } = &call.kind else {
                        continue;
                    };
                    if callee != name {
                        continue;
                    }
                    let Some(call_line) = call.line else { continue };
                    graph.add(call_line, return_line, DepKind::ParameterOut);
                }
            }
            _ => {}
        }
    }
}
