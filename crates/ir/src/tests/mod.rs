use crate::{DepKind, DependencyGraph, Node, NodeKind, SyntaxTree};

fn sample_tree() -> SyntaxTree {
    // class C { void m() { x } } squashed onto three lines
    let mut tree = SyntaxTree::new("Sample.java".into());
    tree.push(Node {
        id: 0,
        parent: None,
        line: Some(1),
        kind: NodeKind::Class { name: "C".into() },
        children: Vec::new(),
    });
    tree.push(Node {
        id: 1,
        parent: Some(0),
        line: Some(2),
        kind: NodeKind::Method { name: "m".into() },
        children: Vec::new(),
    });
    tree.push(Node {
        id: 2,
        parent: Some(1),
        line: Some(3),
        kind: NodeKind::Name { ident: "x".into() },
        children: Vec::new(),
    });
    tree
}

#[test]
fn parent_and_ancestor_walk() {
    let tree = sample_tree();
    assert!(matches!(
        tree.parent(2).map(|n| &n.kind),
        Some(NodeKind::Method { .. })
    ));
    let kinds: Vec<_> = tree.ancestors(2).map(|n| n.id).collect();
    assert_eq!(kinds, vec![1, 0]);
    assert!(tree
        .ancestor_where(2, |n| matches!(n.kind, NodeKind::Class { .. }))
        .is_some());
}

#[test]
fn descendants_are_preorder_and_include_root() {
    let tree = sample_tree();
    assert_eq!(tree.descendants(0), vec![0, 1, 2]);
    assert_eq!(tree.descendants(1), vec![1, 2]);
}

#[test]
fn graph_deduplicates_by_target_and_label() {
    let mut graph = DependencyGraph::default();
    graph.add(5, 3, DepKind::Data);
    graph.add(5, 3, DepKind::Data);
    graph.add(5, 3, DepKind::Control);
    let edges = graph.edges(5).expect("edges for line 5");
    assert_eq!(edges.len(), 2);
}

#[test]
fn graph_suppresses_self_loops() {
    let mut graph = DependencyGraph::default();
    graph.add(4, 4, DepKind::Data);
    assert!(graph.is_empty());
}

#[test]
fn edges_order_by_target_then_label() {
    let mut graph = DependencyGraph::default();
    graph.add(9, 6, DepKind::Control);
    graph.add(9, 2, DepKind::MethodScope);
    graph.add(9, 6, DepKind::Data);
    graph.add(9, 1, DepKind::ClassScope);
    let got: Vec<_> = graph
        .edges(9)
        .unwrap()
        .iter()
        .map(|d| (d.target, d.label.label()))
        .collect();
    assert_eq!(
        got,
        vec![
            (1, "class_scope"),
            (2, "method_scope"),
            (6, "control"),
            (6, "data"),
        ]
    );
}

#[test]
fn lines_iterate_ascending() {
    let mut graph = DependencyGraph::default();
    graph.add(10, 2, DepKind::Data);
    graph.add(3, 1, DepKind::ClassScope);
    let lines: Vec<_> = graph.lines().map(|(l, _)| l).collect();
    assert_eq!(lines, vec![3, 10]);
}

#[test]
fn dot_export_carries_labels() {
    let mut graph = DependencyGraph::default();
    graph.add(7, 6, DepKind::Control);
    let dot = graph.to_dot();
    assert!(dot.starts_with("digraph dependencies {"));
    assert!(dot.contains("7 -> 6 [label=\"control\"];"));
}
