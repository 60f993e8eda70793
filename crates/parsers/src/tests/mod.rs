use crate::parse_java;
use ir::{NodeKind, SyntaxTree};

fn parse(source: &str) -> SyntaxTree {
    parse_java(source, "Test.java").expect("parse fixture")
}

fn names(tree: &SyntaxTree) -> Vec<(&str, usize)> {
    tree.iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Name { ident } => Some((ident.as_str(), n.line?)),
            _ => None,
        })
        .collect()
}

#[test]
fn malformed_source_is_rejected() {
    let err = parse_java("class {{{", "Bad.java").unwrap_err();
    assert!(err.to_string().contains("syntax errors"));
}

#[test]
fn declarations_carry_their_names_and_lines() {
    let tree = parse(
        "\
class A {
    int f;
    A() {
    }
    void m() {
        int x = 1;
    }
}
",
    );
    assert!(tree
        .iter()
        .any(|n| matches!(&n.kind, NodeKind::Class { name } if name == "A") && n.line == Some(1)));
    assert!(tree
        .iter()
        .any(|n| matches!(&n.kind, NodeKind::Constructor { name } if name == "A")
            && n.line == Some(3)));
    assert!(tree
        .iter()
        .any(|n| matches!(&n.kind, NodeKind::Method { name } if name == "m") && n.line == Some(5)));
    // the field declarator hangs off a Field parent, the local does not
    let field_decl = tree
        .iter()
        .find(|n| matches!(&n.kind, NodeKind::VarDecl { name } if name == "f"))
        .unwrap();
    assert!(matches!(
        tree.parent(field_decl.id).map(|p| &p.kind),
        Some(NodeKind::Field)
    ));
    let local_decl = tree
        .iter()
        .find(|n| matches!(&n.kind, NodeKind::VarDecl { name } if name == "x"))
        .unwrap();
    assert!(!matches!(
        tree.parent(local_decl.id).map(|p| &p.kind),
        Some(NodeKind::Field)
    ));
}

#[test]
fn only_expression_identifiers_become_names() {
    let tree = parse(
        "\
class A {
    void m(int p) {
        int x = p;
        use(x);
    }
}
",
    );
    let got = names(&tree);
    // declarator, parameter, method and call names never appear;
    // the initializer read and the argument read do
    assert_eq!(got, vec![("p", 3), ("x", 4)]);
}

#[test]
fn assignment_targets_keep_verbatim_text() {
    let tree = parse(
        "\
class A {
    int f;
    void m() {
        this.f = 1;
        int x = 0;
        x = 2;
    }
}
",
    );
    let targets: Vec<&str> = tree
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Assign { target } => Some(target.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec!["this.f", "x"]);
    // the simple target is also an expression-position name, the
    // qualified one is not
    let got = names(&tree);
    assert_eq!(got, vec![("x", 6)]);
}

#[test]
fn if_statements_expose_their_parts() {
    let tree = parse(
        "\
class A {
    void m(int c) {
        if (c > 0) {
            inc();
        } else {
            dec();
        }
    }
}
",
    );
    let if_node = tree
        .iter()
        .find(|n| matches!(n.kind, NodeKind::If { .. }))
        .unwrap();
    let NodeKind::If {
        condition,
        then_branch,
        else_branch,
    } = if_node.kind
    else {
        unreachable!()
    };
    assert_eq!(condition.and_then(|c| tree.line(c)), Some(3));
    assert_eq!(then_branch.and_then(|b| tree.line(b)), Some(3));
    assert_eq!(else_branch.and_then(|b| tree.line(b)), Some(5));
}

#[test]
fn calls_carry_names_and_argument_nodes() {
    let tree = parse(
        "\
class A {
    void m(int a, int b) {
        combine(a, b + 1);
    }
}
",
    );
    let call = tree
        .iter()
        .find(|n| matches!(n.kind, NodeKind::Call { .. }))
        .unwrap();
    let NodeKind::Call { name, args } = &call.kind else {
        unreachable!()
    };
    assert_eq!(name, "combine");
    assert_eq!(args.len(), 2);
}

#[test]
fn creations_carry_the_type_name() {
    let tree = parse(
        "\
class A {
    void m() {
        A copy = new A();
    }
}
",
    );
    assert!(tree
        .iter()
        .any(|n| matches!(&n.kind, NodeKind::New { type_name } if type_name == "A")
            && n.line == Some(3)));
}

#[test]
fn comments_are_classified_and_inert() {
    let tree = parse(
        "\
class A {
    // explain
    void m() {
    }
}
",
    );
    assert!(tree
        .iter()
        .any(|n| n.is_comment() && n.line == Some(2)));
}

#[test]
fn enhanced_for_variables_act_as_declarators() {
    let tree = parse(
        "\
class A {
    void m(int[] xs) {
        for (int x : xs) {
            use(x);
        }
    }
}
",
    );
    assert!(tree
        .iter()
        .any(|n| matches!(&n.kind, NodeKind::VarDecl { name } if name == "x")
            && n.line == Some(3)));
}

#[test]
fn import_segments_are_not_names() {
    let tree = parse(
        "\
import java.util.List;

class A {
    void m() {
    }
}
",
    );
    assert!(names(&tree).is_empty());
}

#[test]
fn field_access_reads_name_the_object_not_the_member() {
    let tree = parse(
        "\
class A {
    void m() {
        System.out.println(1);
    }
}
",
    );
    assert_eq!(names(&tree), vec![("System", 3)]);
}
