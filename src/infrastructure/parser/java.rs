//! Java source parser
//!
//! Builds a [`SourceTree`] from Java source with tree-sitter-java.
//! Supports: classes, interfaces, enums, records, annotation types, methods,
//! constructors, fields, interface constants and annotation elements.

use tree_sitter::{Node, Parser};

use crate::domain::entities::{
    Declaration, DeclarationHeader, DocComment, Expression, FieldDeclaration, Import, Marker,
    MarkerArguments, MemberDeclaration, Modifiers, SourceCode, SourceTree, TypeDeclaration,
    TypeRef, Variable,
};
use crate::domain::ports::SourceParser;
use crate::error::{HeraldError, HeraldResult};

use super::syntax::{
    find_child_by_kind, first_error, has_child_kind, named_children, node_span, node_text,
};

const TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Java language parser
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSourceParser;

impl JavaSourceParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for JavaSourceParser {
    fn language(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse(&self, source: &SourceCode) -> HeraldResult<SourceTree> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| HeraldError::ParserUnavailable(e.to_string()))?;
        let tree = parser
            .parse(source.text(), None)
            .ok_or_else(|| HeraldError::ParserUnavailable("parsing was cancelled".into()))?;

        let root = tree.root_node();
        if let Some(error) = first_error(root) {
            let at = error.start_position();
            return Err(HeraldError::Syntax {
                unit: source.name().to_string(),
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        JavaTreeBuilder {
            text: source.text(),
        }
        .build(root)
    }
}

/// Converts tree-sitter nodes into domain declarations
struct JavaTreeBuilder<'s> {
    text: &'s str,
}

impl<'s> JavaTreeBuilder<'s> {
    fn text(&self, node: &Node<'_>) -> &'s str {
        node_text(node, self.text)
    }

    fn build(&self, root: Node<'_>) -> HeraldResult<SourceTree> {
        let mut tree = SourceTree::default();
        for child in named_children(root) {
            match child.kind() {
                "package_declaration" => tree.package = self.dotted_name(child),
                "import_declaration" => {
                    if let Some(import) = self.import(child) {
                        tree.imports.push(import);
                    }
                }
                kind if TYPE_KINDS.contains(&kind) => tree.declarations.push(self.type_decl(child)?),
                _ => {}
            }
        }
        Ok(tree)
    }

    /// `a.b.c` of a package or import declaration
    fn dotted_name(&self, node: Node<'_>) -> Option<String> {
        find_child_by_kind(node, "scoped_identifier")
            .or_else(|| find_child_by_kind(node, "identifier"))
            .map(|name| strip_whitespace(self.text(&name)))
    }

    fn import(&self, node: Node<'_>) -> Option<Import> {
        Some(Import {
            path: self.dotted_name(node)?,
            is_static: has_child_kind(node, "static"),
            on_demand: has_child_kind(node, "asterisk"),
        })
    }

    fn type_decl(&self, node: Node<'_>) -> HeraldResult<Declaration> {
        let decl = TypeDeclaration {
            name: self.name(node),
            header: self.header(node, false)?,
            members: match node.child_by_field_name("body") {
                Some(body) => self.body_members(body)?,
                None => Vec::new(),
            },
        };
        Ok(if node.kind() == "annotation_type_declaration" {
            Declaration::MarkerDeclaration(decl)
        } else {
            Declaration::Type(decl)
        })
    }

    /// Members of a class, interface, enum, record or annotation body
    fn body_members(&self, body: Node<'_>) -> HeraldResult<Vec<Declaration>> {
        let implicit_constants = matches!(body.kind(), "interface_body" | "annotation_type_body");
        let mut members = Vec::new();
        for child in named_children(body) {
            match child.kind() {
                "enum_body_declarations" => members.extend(self.body_members(child)?),
                "enum_constant" => {
                    if let Some(constant) = self.enum_constant_body(child)? {
                        members.push(constant);
                    }
                }
                kind if TYPE_KINDS.contains(&kind) => members.push(self.type_decl(child)?),
                "method_declaration" => members.push(Declaration::Method(self.member(child)?)),
                "constructor_declaration" | "compact_constructor_declaration" => {
                    members.push(Declaration::Constructor(self.member(child)?))
                }
                "annotation_type_element_declaration" => {
                    members.push(Declaration::MarkerMember(self.member(child)?))
                }
                "field_declaration" => {
                    members.push(Declaration::Field(self.field(child, implicit_constants)?))
                }
                "constant_declaration" => {
                    members.push(Declaration::Field(self.field(child, true)?))
                }
                "block" | "static_initializer" => members.extend(self.nested_types(child)?),
                _ => {}
            }
        }
        Ok(members)
    }

    /// Class body of an enum constant, as an unmarked type named after the constant
    ///
    /// The constant itself is never a region; only declarations in its body are.
    fn enum_constant_body(&self, node: Node<'_>) -> HeraldResult<Option<Declaration>> {
        let Some(body) = node.child_by_field_name("body") else {
            return Ok(None);
        };
        Ok(Some(Declaration::Type(TypeDeclaration {
            name: self.name(node),
            header: DeclarationHeader {
                span: Some(node_span(&node)?),
                ..Default::default()
            },
            members: self.body_members(body)?,
        })))
    }

    fn member(&self, node: Node<'_>) -> HeraldResult<MemberDeclaration> {
        Ok(MemberDeclaration {
            name: self.name(node),
            header: self.header(node, false)?,
            members: match node.child_by_field_name("body") {
                Some(body) => self.nested_types(body)?,
                None => Vec::new(),
            },
        })
    }

    fn field(&self, node: Node<'_>, implicit_constant: bool) -> HeraldResult<FieldDeclaration> {
        let value_type = match node.child_by_field_name("type") {
            Some(ty) => self.type_ref(ty),
            None => TypeRef::new("", 0),
        };

        let mut variables = Vec::new();
        let mut members = Vec::new();
        for declarator in named_children(node) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let value = declarator.child_by_field_name("value");
            if let Some(value) = value {
                members.extend(self.nested_types(value)?);
            }
            variables.push(Variable {
                name: declarator
                    .child_by_field_name("name")
                    .map(|n| self.text(&n).to_string())
                    .unwrap_or_default(),
                dimensions: declarator
                    .child_by_field_name("dimensions")
                    .map(count_dimensions)
                    .unwrap_or(0),
                initializer: value.map(|v| self.expression(v)),
            });
        }

        Ok(FieldDeclaration {
            header: self.header(node, implicit_constant)?,
            value_type,
            variables,
            members,
        })
    }

    fn type_ref(&self, node: Node<'_>) -> TypeRef {
        if node.kind() == "array_type" {
            let element = node
                .child_by_field_name("element")
                .map(|e| self.type_ref(e))
                .unwrap_or_else(|| TypeRef::new("", 0));
            let dims = node
                .child_by_field_name("dimensions")
                .map(count_dimensions)
                .unwrap_or(0);
            TypeRef::new(element.name, element.dimensions + dims)
        } else {
            TypeRef::new(strip_whitespace(self.text(&node)), 0)
        }
    }

    /// Local and anonymous types below `node`, without entering them
    ///
    /// Members of an anonymous class body are lifted into the enclosing
    /// declaration.
    fn nested_types(&self, node: Node<'_>) -> HeraldResult<Vec<Declaration>> {
        let mut found = Vec::new();
        for child in named_children(node) {
            if TYPE_KINDS.contains(&child.kind()) {
                found.push(self.type_decl(child)?);
            } else if child.kind() == "class_body" {
                found.extend(self.body_members(child)?);
            } else {
                found.extend(self.nested_types(child)?);
            }
        }
        Ok(found)
    }

    fn header(&self, node: Node<'_>, implicit_constant: bool) -> HeraldResult<DeclarationHeader> {
        let mut header = DeclarationHeader {
            span: Some(node_span(&node)?),
            doc: self.doc_comment(node)?,
            ..Default::default()
        };
        if implicit_constant {
            header.modifiers = Modifiers::constant();
        }

        if let Some(modifiers) = find_child_by_kind(node, "modifiers") {
            let mut cursor = modifiers.walk();
            for child in modifiers.children(&mut cursor) {
                match child.kind() {
                    "static" => header.modifiers.is_static = true,
                    "final" => header.modifiers.is_final = true,
                    "annotation" | "marker_annotation" => header.markers.push(self.marker(child)),
                    _ => {}
                }
            }
        }
        Ok(header)
    }

    /// `/** ... */` preceding the declaration, possibly followed by line comments
    fn doc_comment(&self, node: Node<'_>) -> HeraldResult<Option<DocComment>> {
        let mut prev = node.prev_sibling();
        while let Some(comment) = prev.filter(|p| p.kind() == "line_comment") {
            prev = comment.prev_sibling();
        }
        match prev {
            Some(prev) if prev.kind() == "block_comment" && self.text(&prev).starts_with("/**") => {
                Ok(Some(DocComment {
                    span: Some(node_span(&prev)?),
                }))
            }
            _ => Ok(None),
        }
    }

    fn marker(&self, node: Node<'_>) -> Marker {
        let name = node
            .child_by_field_name("name")
            .map(|n| strip_whitespace(self.text(&n)))
            .unwrap_or_default();

        let arguments = match node.child_by_field_name("arguments") {
            None => MarkerArguments::None,
            Some(list) => {
                let values = named_children(list);
                let pairs: Vec<_> = values
                    .iter()
                    .filter(|v| v.kind() == "element_value_pair")
                    .collect();
                if values.is_empty() || !pairs.is_empty() {
                    MarkerArguments::Named(
                        pairs
                            .into_iter()
                            .map(|pair| {
                                let key = pair
                                    .child_by_field_name("key")
                                    .map(|k| self.text(&k).to_string())
                                    .unwrap_or_default();
                                let value = pair
                                    .child_by_field_name("value")
                                    .map(|v| self.expression(v))
                                    .unwrap_or_else(|| Expression::Other(String::new()));
                                (key, value)
                            })
                            .collect(),
                    )
                } else {
                    MarkerArguments::Single(self.expression(values[0]))
                }
            }
        };

        Marker::new(name, arguments)
    }

    fn expression(&self, node: Node<'_>) -> Expression {
        match node.kind() {
            "string_literal" => Expression::StringLiteral(unquote(self.text(&node))),
            "identifier" => Expression::Name(self.text(&node).to_string()),
            "array_initializer" | "element_value_array_initializer" => Expression::Array(
                named_children(node)
                    .into_iter()
                    .map(|item| self.expression(item))
                    .collect(),
            ),
            _ => Expression::Other(self.text(&node).to_string()),
        }
    }

    fn name(&self, node: Node<'_>) -> String {
        node.child_by_field_name("name")
            .map(|n| self.text(&n).to_string())
            .unwrap_or_default()
    }
}

/// Number of `[]` pairs in a `dimensions` node
fn count_dimensions(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    let count = node
        .children(&mut cursor)
        .filter(|child| child.kind() == "[")
        .count();
    count
}

fn strip_whitespace(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Literal value of a Java string or text block
fn unquote(literal: &str) -> String {
    if let Some(block) = literal
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
    {
        return unescape(&strip_indent(block));
    }
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    unescape(inner)
}

/// Text block content with incidental indentation and trailing spaces removed
///
/// The closing delimiter's line takes part in the indentation minimum even
/// when it is blank, so `"""` on its own line leaves a trailing newline.
fn strip_indent(block: &str) -> String {
    let content = match block.find('\n') {
        Some(opening) => &block[opening + 1..],
        None => "",
    };
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let last = lines.len().saturating_sub(1);

    let indent = lines
        .iter()
        .enumerate()
        .filter(|(idx, line)| *idx == last || !line.trim().is_empty())
        .map(|(_, line)| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.get(indent..).unwrap_or("").trim_end_matches([' ', '\t'])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('s') => out.push(' '),
            Some(first @ '0'..='7') => {
                // \377 is the largest octal escape
                let max_digits = if first <= '3' { 3 } else { 2 };
                let mut value = first.to_digit(8).unwrap_or(0);
                for _ in 1..max_digits {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.extend(char::from_u32(value));
            }
            Some('\n') => {}
            Some('u') => {
                while chars.peek() == Some(&'u') {
                    chars.next();
                }
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
