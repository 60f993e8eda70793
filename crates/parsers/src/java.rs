use anyhow::{bail, Context, Result};
use ir::{Node, NodeId, NodeKind, SyntaxTree};
use tree_sitter::Node as TsNode;

/// Parses Java source text into a [`SyntaxTree`].
///
/// Malformed source is fatal: the engine has nothing to recover from a
/// partial tree, so error nodes abort the run instead of degrading.
pub fn parse_java(content: &str, file_path: &str) -> Result<SyntaxTree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(tree_sitter_java::language())
        .context("load java grammar")?;
    let Some(tree) = parser.parse(content, None) else {
        bail!("failed to parse java source: {file_path}");
    };
    let root = tree.root_node();
    if root.has_error() || root.is_error() {
        bail!("java source contains syntax errors: {file_path}");
    }

    let mut builder = TreeBuilder {
        src: content,
        tree: SyntaxTree::new(file_path.to_string()),
    };
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        builder.walk(child, None, true);
    }
    tracing::debug!(file = file_path, nodes = builder.tree.len(), "parsed java source");
    Ok(builder.tree)
}

struct TreeBuilder<'a> {
    src: &'a str,
    tree: SyntaxTree,
}

impl<'a> TreeBuilder<'a> {
    fn text(&self, node: TsNode) -> String {
        node.utf8_text(self.src.as_bytes())
            .unwrap_or_default()
            .to_string()
    }

    fn field_text(&self, node: TsNode, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|c| self.text(c))
            .unwrap_or_default()
    }

    /// Maps one grammar node (and its subtree) into the arena and returns
    /// its id. `ident_to_name` controls whether a bare `identifier` is an
    /// expression-position name reference; name *fields* of declarations,
    /// invocations and accesses never are.
    fn walk(&mut self, node: TsNode, parent: Option<NodeId>, ident_to_name: bool) -> NodeId {
        let id = self.tree.len();
        let line = Some(node.start_position().row + 1);
        let kind = match node.kind() {
            "line_comment" | "block_comment" => NodeKind::Comment,
            "identifier" if ident_to_name => NodeKind::Name {
                ident: self.text(node),
            },
            "return_statement" => NodeKind::Return,
            "field_declaration" => NodeKind::Field,
            other => NodeKind::Other(other.to_string()),
        };
        self.tree.push(Node {
            id,
            parent,
            line,
            kind,
            children: Vec::new(),
        });

        match node.kind() {
            "line_comment" | "block_comment" | "identifier" => return id,
            "class_declaration" | "interface_declaration" => {
                let name = self.field_text(node, "name");
                self.walk_children(node, id, &["name"], true);
                self.set_kind(id, NodeKind::Class { name });
            }
            "method_declaration" => {
                let name = self.field_text(node, "name");
                self.walk_children(node, id, &["name"], true);
                self.set_kind(id, NodeKind::Method { name });
            }
            "constructor_declaration" => {
                let name = self.field_text(node, "name");
                self.walk_children(node, id, &["name"], true);
                self.set_kind(id, NodeKind::Constructor { name });
            }
            "variable_declarator" => {
                let name = self.field_text(node, "name");
                self.walk_children(node, id, &["name"], true);
                self.set_kind(id, NodeKind::VarDecl { name });
            }
            "assignment_expression" => {
                let target = self.field_text(node, "left");
                self.walk_children(node, id, &[], true);
                self.set_kind(id, NodeKind::Assign { target });
            }
            "if_statement" => {
                let mapped = self.walk_children(node, id, &[], true);
                let kind = NodeKind::If {
                    condition: self.mapped_field(node, "condition", &mapped),
                    then_branch: self.mapped_field(node, "consequence", &mapped),
                    else_branch: self.mapped_field(node, "alternative", &mapped),
                };
                self.set_kind(id, kind);
            }
            "for_statement" => {
                let mapped = self.walk_children(node, id, &[], true);
                let kind = NodeKind::For {
                    compare: self.mapped_field(node, "condition", &mapped),
                    body: self.mapped_field(node, "body", &mapped),
                };
                self.set_kind(id, kind);
            }
            "enhanced_for_statement" => {
                // the loop variable behaves like a declarator for the
                // definition tracker, even though the grammar exposes it
                // as a bare name field
                let var = self.field_text(node, "name");
                let name_ts = node.child_by_field_name("name").map(|c| c.id());
                let mut cursor = node.walk();
                let children: Vec<TsNode> = node.named_children(&mut cursor).collect();
                for child in children {
                    if Some(child.id()) == name_ts {
                        let cid = self.tree.len();
                        let cline = Some(child.start_position().row + 1);
                        self.tree.push(Node {
                            id: cid,
                            parent: Some(id),
                            line: cline,
                            kind: NodeKind::VarDecl { name: var.clone() },
                            children: Vec::new(),
                        });
                    } else {
                        self.walk(child, Some(id), true);
                    }
                }
            }
            "try_statement" | "try_with_resources_statement" => {
                let mapped = self.walk_children(node, id, &[], true);
                let kind = NodeKind::Try {
                    block: self.mapped_field(node, "body", &mapped),
                };
                self.set_kind(id, kind);
            }
            "catch_clause" => {
                let mapped = self.walk_children(node, id, &[], true);
                let kind = NodeKind::Catch {
                    body: self.mapped_field(node, "body", &mapped),
                };
                self.set_kind(id, kind);
            }
            "method_invocation" => {
                let name = self.field_text(node, "name");
                let mapped = self.walk_children(node, id, &["name"], true);
                let args = self
                    .mapped_field(node, "arguments", &mapped)
                    .and_then(|list| self.tree.get(list).map(|n| n.children.clone()))
                    .unwrap_or_default();
                self.set_kind(id, NodeKind::Call { name, args });
            }
            "object_creation_expression" => {
                let type_name = self.field_text(node, "type");
                self.walk_children(node, id, &[], true);
                self.set_kind(id, NodeKind::New { type_name });
            }
            "field_access" => {
                // the accessed member is not an expression-position name,
                // the object it is read from is
                self.walk_children(node, id, &["field"], true);
            }
            "formal_parameter" | "catch_formal_parameter" => {
                self.walk_children(node, id, &["name"], true);
            }
            "annotation" | "marker_annotation" => {
                self.walk_children(node, id, &["name"], true);
            }
            "scoped_identifier" | "labeled_statement" => {
                self.walk_children(node, id, &[], false);
            }
            _ => {
                self.walk_children(node, id, &[], true);
            }
        }
        id
    }

    /// Walks every named child except those behind the skipped field
    /// names, returning (grammar node id → arena id) pairs so payload
    /// kinds can point at the mapped children.
    fn walk_children(
        &mut self,
        node: TsNode,
        id: NodeId,
        skip_fields: &[&str],
        ident_to_name: bool,
    ) -> Vec<(usize, NodeId)> {
        let skipped: Vec<usize> = skip_fields
            .iter()
            .filter_map(|f| node.child_by_field_name(f).map(|c| c.id()))
            .collect();
        let mut cursor = node.walk();
        let children: Vec<TsNode> = node.named_children(&mut cursor).collect();
        let mut mapped = Vec::new();
        for child in children {
            if skipped.contains(&child.id()) {
                continue;
            }
            let cid = self.walk(child, Some(id), ident_to_name);
            mapped.push((child.id(), cid));
        }
        mapped
    }

    fn mapped_field(
        &self,
        node: TsNode,
        field: &str,
        mapped: &[(usize, NodeId)],
    ) -> Option<NodeId> {
        let ts_id = node.child_by_field_name(field)?.id();
        mapped.iter().find(|(t, _)| *t == ts_id).map(|(_, c)| *c)
    }

    fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        if let Some(node) = self.tree.get_mut(id) {
            node.kind = kind;
        }
    }
}
