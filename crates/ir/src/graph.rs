//! Line-level dependency graph: for every source line, the set of other
//! lines it depends on, each edge tagged with a dependency kind.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Kind of a dependency edge.
///
/// Variants are declared in the lexical order of their serialized labels
/// so the derived `Ord` doubles as the deterministic tie-break between
/// edges sharing a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DepKind {
    #[serde(rename = "call")]
    Call,
    #[serde(rename = "class_instantiation")]
    ClassInstantiation,
    #[serde(rename = "class_scope")]
    ClassScope,
    #[serde(rename = "constructor_call")]
    ConstructorCall,
    #[serde(rename = "control")]
    Control,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "method_scope")]
    MethodScope,
    #[serde(rename = "parameter-in")]
    ParameterIn,
    #[serde(rename = "parameter-out")]
    ParameterOut,
}

impl DepKind {
    pub fn label(&self) -> &'static str {
        match self {
            DepKind::Call => "call",
            DepKind::ClassInstantiation => "class_instantiation",
            DepKind::ClassScope => "class_scope",
            DepKind::ConstructorCall => "constructor_call",
            DepKind::Control => "control",
            DepKind::Data => "data",
            DepKind::MethodScope => "method_scope",
            DepKind::ParameterIn => "parameter-in",
            DepKind::ParameterOut => "parameter-out",
        }
    }
}

/// One outgoing edge: target line plus kind. Edges are deduplicated per
/// source line as a set keyed by exactly this pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dependency {
    pub target: usize,
    pub label: DepKind,
}

/// Adjacency structure keyed by source line.
///
/// All edge builders insert through [`DependencyGraph::add`], which
/// carries the global self-loop guard: an edge whose target equals its
/// source is silently dropped. Vertices only come into existence with
/// their first edge, so every recorded vertex has a non-empty edge set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    adjacency: BTreeMap<usize, BTreeSet<Dependency>>,
}

impl DependencyGraph {
    pub fn add(&mut self, source: usize, target: usize, label: DepKind) {
        if source == target {
            return;
        }
        self.adjacency
            .entry(source)
            .or_default()
            .insert(Dependency { target, label });
    }

    /// Lines with at least one outgoing edge, ascending, paired with
    /// their edges ordered by (target, label).
    pub fn lines(&self) -> impl Iterator<Item = (usize, &BTreeSet<Dependency>)> {
        self.adjacency.iter().map(|(line, deps)| (*line, deps))
    }

    pub fn edges(&self, line: usize) -> Option<&BTreeSet<Dependency>> {
        self.adjacency.get(&line)
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Exports the graph to DOT format.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph dependencies {\n");
        for (line, deps) in self.lines() {
            for dep in deps {
                out.push_str(&format!(
                    "    {} -> {} [label=\"{}\"];\n",
                    line,
                    dep.target,
                    dep.label.label()
                ));
            }
        }
        out.push('}');
        out
    }
}
