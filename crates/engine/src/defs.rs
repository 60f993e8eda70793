//! Approximate reaching definitions, per method.
//!
//! Statements are scanned in strictly increasing line order while a
//! possible-definitions map tracks, for each local variable, the lines
//! where it was most recently (possibly branch-ambiguously) defined. An
//! unconditional assignment kills every prior definition; assignments
//! inside an if-statement are staged and merged additively when the
//! if's own line is reached, so both branches survive as co-possible
//! definitions. There is no loop back-edge handling and nested
//! conditionals merge at the outer if's visit — an accepted
//! approximation, not a fixpoint.

use crate::registries::{is_field_declarator, SymbolRegistries};
use ir::{DepKind, DependencyGraph, NodeId, NodeKind, SyntaxTree};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Emits `data` edges from every local-variable reference to its live
/// definition lines, one method at a time.
pub(crate) fn add_data_edges(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    graph: &mut DependencyGraph,
) {
    for node in tree.iter() {
        if matches!(node.kind, NodeKind::Method { .. }) {
            track_method(tree, registries, node.id, graph);
        }
    }
}

fn track_method(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    method: NodeId,
    graph: &mut DependencyGraph,
) {
    let mut tracker = DefinitionTracker::new(tree, registries, method, None);
    for (line, id) in sorted_nodes(tree, method) {
        tracker.observe(id);
        let Some(NodeKind::Name { ident }) = tree.get(id).map(|n| &n.kind) else {
            continue;
        };
        if registries.field_decls.contains_key(ident) {
            continue;
        }
        if let Some(defs) = tracker.definitions(ident) {
            for &def in defs {
                if def < line {
                    graph.add(line, def, DepKind::Data);
                }
            }
        }
    }
}

/// Runs the tracker over `method` restricted to nodes on lines strictly
/// before `limit` and returns the final possible-definitions map. Used
/// by the call builder to resolve which definition of an argument flows
/// into a call site.
pub(crate) fn definitions_before(
    tree: &SyntaxTree,
    registries: &SymbolRegistries,
    method: NodeId,
    limit: usize,
) -> HashMap<String, BTreeSet<usize>> {
    let mut tracker = DefinitionTracker::new(tree, registries, method, Some(limit));
    for (line, id) in sorted_nodes(tree, method) {
        if line >= limit {
            break;
        }
        tracker.observe(id);
    }
    tracker.into_definitions()
}

/// Non-comment descendants of `root` that carry a line, sorted by
/// `(line, id)`. Ids are pre-order, so nodes sharing a line keep the
/// order in which the parser discovered them.
fn sorted_nodes(tree: &SyntaxTree, root: NodeId) -> Vec<(usize, NodeId)> {
    let mut nodes: Vec<(usize, NodeId)> = tree
        .descendants(root)
        .into_iter()
        .filter_map(|id| {
            let node = tree.get(id)?;
            if node.is_comment() {
                return None;
            }
            Some((node.line?, id))
        })
        .collect();
    nodes.sort_unstable();
    nodes
}

struct DefinitionTracker<'a> {
    tree: &'a SyntaxTree,
    field_decls: &'a HashMap<String, usize>,
    /// Nodes at or past this line are invisible to the tracker.
    limit: Option<usize>,
    /// Declarator lines per variable name, fixed at seeding.
    decl_lines: HashMap<String, BTreeSet<usize>>,
    /// Live candidate definition lines per variable name.
    live: HashMap<String, BTreeSet<usize>>,
    /// Open if-statement → writes staged inside its branches.
    pending: BTreeMap<NodeId, HashMap<String, BTreeSet<usize>>>,
}

impl<'a> DefinitionTracker<'a> {
    fn new(
        tree: &'a SyntaxTree,
        registries: &'a SymbolRegistries,
        method: NodeId,
        limit: Option<usize>,
    ) -> Self {
        // seed with every non-field declarator in the method; the seed is
        // not line-restricted, only the scan is
        let mut decl_lines: HashMap<String, BTreeSet<usize>> = HashMap::new();
        let mut live: HashMap<String, BTreeSet<usize>> = HashMap::new();
        for id in tree.descendants(method) {
            let Some(node) = tree.get(id) else { continue };
            let NodeKind::VarDecl { name } = &node.kind else {
                continue;
            };
            if is_field_declarator(tree, id) {
                continue;
            }
            let Some(line) = node.line else { continue };
            decl_lines.entry(name.clone()).or_default().insert(line);
            live.entry(name.clone()).or_default().insert(line);
        }
        Self {
            tree,
            field_decls: &registries.field_decls,
            limit,
            decl_lines,
            live,
            pending: BTreeMap::new(),
        }
    }

    fn observe(&mut self, id: NodeId) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else { return };
        let Some(line) = node.line else { return };
        match &node.kind {
            NodeKind::VarDecl { name } => {
                // declarations accumulate, they never replace
                if !is_field_declarator(tree, id) {
                    self.live.entry(name.clone()).or_default().insert(line);
                }
            }
            NodeKind::Assign { target } => {
                if self.field_decls.contains_key(target) {
                    return;
                }
                if let Some(if_id) = self.enclosing_if(id) {
                    // branch writes are provisional until the if closes
                    self.pending
                        .entry(if_id)
                        .or_default()
                        .entry(target.clone())
                        .or_default()
                        .insert(line);
                } else {
                    // unconditional reassignment is a strong kill
                    let defs = self.live.entry(target.clone()).or_default();
                    defs.clear();
                    defs.insert(line);
                }
            }
            NodeKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                self.close_if(id, *then_branch, *else_branch);
            }
            _ => {}
        }
    }

    /// Merges both branches' writes into the live sets (additively) and
    /// discards the staged entry for this if-statement.
    fn close_if(
        &mut self,
        id: NodeId,
        then_branch: Option<NodeId>,
        else_branch: Option<NodeId>,
    ) {
        let tree = self.tree;
        let mut merged = self.pending.remove(&id).unwrap_or_default();
        for branch in [then_branch, else_branch].into_iter().flatten() {
            for desc in tree.descendants(branch) {
                let Some(node) = tree.get(desc) else { continue };
                let NodeKind::Assign { target } = &node.kind else {
                    continue;
                };
                if self.field_decls.contains_key(target) {
                    continue;
                }
                let Some(line) = node.line else { continue };
                if !self.within_limit(line) {
                    continue;
                }
                merged.entry(target.clone()).or_default().insert(line);
            }
        }
        // only the names assigned inside this if may lose their
        // declaration lines
        for (name, lines) in merged {
            self.live
                .entry(name.clone())
                .or_default()
                .extend(lines.iter().copied());
            self.prune_declaration(&name);
        }
    }

    /// Once a reassignment is known, the initial declaration no longer
    /// counts as a live definition.
    fn prune_declaration(&mut self, name: &str) {
        let Some(decls) = self.decl_lines.get(name) else {
            return;
        };
        let Some(defs) = self.live.get_mut(name) else {
            return;
        };
        let reassigned = defs.len() > 1
            || defs
                .iter()
                .next()
                .map_or(false, |line| !decls.contains(line));
        if reassigned {
            defs.retain(|line| !decls.contains(line));
        }
    }

    fn definitions(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.live.get(name)
    }

    fn into_definitions(self) -> HashMap<String, BTreeSet<usize>> {
        self.live
    }

    fn within_limit(&self, line: usize) -> bool {
        self.limit.map_or(true, |limit| line < limit)
    }

    fn enclosing_if(&self, id: NodeId) -> Option<NodeId> {
        self.tree
            .ancestor_where(id, |n| matches!(n.kind, NodeKind::If { .. }))
            .map(|n| n.id)
    }
}
