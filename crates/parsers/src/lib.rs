//! Parsing collaborator for the dependency graph analyzer.
//!
//! Converts raw Java source text into the [`ir::SyntaxTree`] the engine
//! consumes: every named grammar node becomes an arena node with a
//! 1-based begin line, a discriminated kind and parent/children indices.
//! Parsing is the only stage allowed to fail the run; everything past it
//! degrades by skipping.

pub mod java;

pub use java::parse_java;

#[cfg(test)]
mod tests;
