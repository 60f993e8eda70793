//! Data model shared by the parser, the inference engine and the
//! reporters: the arena syntax tree (module [`ast`]) and the line-level
//! dependency graph (module [`graph`]). Nothing here performs I/O or
//! analysis.

pub mod ast;
pub mod graph;

pub use ast::{Node, NodeId, NodeKind, SyntaxTree};
pub use graph::{DepKind, Dependency, DependencyGraph};

#[cfg(test)]
mod tests;
