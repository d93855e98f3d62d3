//! Declaration tree produced by a source parser
//!
//! The tree is a closed set of tagged declaration variants. Every variant
//! exposes the same header (markers, modifiers, span, doc comment) so one
//! traversal handles all kinds.

use crate::domain::value_objects::{DeclarationKind, Span};

/// Parsed source unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTree {
    /// Dotted package name, if declared
    pub package: Option<String>,
    pub imports: Vec<Import>,
    /// Top-level declarations in source order
    pub declarations: Vec<Declaration>,
}

impl SourceTree {
    /// Visit every declaration depth-first in source order
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Declaration)) {
        fn walk_one<'a>(decl: &'a Declaration, visit: &mut dyn FnMut(&'a Declaration)) {
            visit(decl);
            for member in decl.members() {
                walk_one(member, visit);
            }
        }
        for decl in &self.declarations {
            walk_one(decl, visit);
        }
    }
}

/// An `import` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Dotted path without the trailing `.*`
    pub path: String,
    pub is_static: bool,
    /// `import a.b.*;`
    pub on_demand: bool,
}

impl Import {
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
            on_demand: false,
        }
    }

    pub fn on_demand(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
            on_demand: true,
        }
    }
}

/// Modifiers relevant to constant detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub is_static: bool,
    pub is_final: bool,
}

impl Modifiers {
    /// `static final`
    pub fn constant() -> Self {
        Self {
            is_static: true,
            is_final: true,
        }
    }
}

/// Leading documentation comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocComment {
    pub span: Option<Span>,
}

/// Expression shapes the watcher machinery understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// String literal, already unescaped
    StringLiteral(String),
    /// Bare identifier
    Name(String),
    /// `{ a, b }` array or element-value initializer
    Array(Vec<Expression>),
    /// Anything else, kept as source text for error messages
    Other(String),
}

impl Expression {
    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Expression::StringLiteral(value) => format!("\"{}\"", value),
            Expression::Name(name) => name.clone(),
            Expression::Array(items) => format!("array of {} element(s)", items.len()),
            Expression::Other(text) => text.clone(),
        }
    }
}

/// Arguments of one annotation usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerArguments {
    /// `@Marker`
    None,
    /// `@Marker(value)`
    Single(Expression),
    /// `@Marker(key = value, ...)`, possibly empty: `@Marker()`
    Named(Vec<(String, Expression)>),
}

/// One annotation usage on a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Name as written: simple or dotted
    pub name: String,
    pub arguments: MarkerArguments,
}

impl Marker {
    pub fn new(name: impl Into<String>, arguments: MarkerArguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Header shared by all declaration variants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationHeader {
    pub markers: Vec<Marker>,
    pub modifiers: Modifiers,
    pub span: Option<Span>,
    pub doc: Option<DocComment>,
}

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Element type as written, e.g. `String` or `java.lang.String`
    pub name: String,
    /// Array dimensions written on the type (`String[]` → 1)
    pub dimensions: usize,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, dimensions: usize) -> Self {
        Self {
            name: name.into(),
            dimensions,
        }
    }

    pub fn is_string(&self) -> bool {
        self.name == "String" || self.name == "java.lang.String"
    }
}

/// One variable of a field declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// Array dimensions written on the variable (`NAME[]` → 1)
    pub dimensions: usize,
    pub initializer: Option<Expression>,
}

impl Variable {
    pub fn new(name: impl Into<String>, initializer: Option<Expression>) -> Self {
        Self {
            name: name.into(),
            dimensions: 0,
            initializer,
        }
    }
}

/// Class, interface, enum, record or annotation type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub header: DeclarationHeader,
    pub members: Vec<Declaration>,
}

/// Method, constructor or annotation element
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDeclaration {
    pub name: String,
    pub header: DeclarationHeader,
    /// Local and anonymous types declared in the body
    pub members: Vec<Declaration>,
}

/// Field or constant declaration, possibly with several variables
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub header: DeclarationHeader,
    pub value_type: TypeRef,
    pub variables: Vec<Variable>,
    /// Anonymous types declared in initializers
    pub members: Vec<Declaration>,
}

/// A declaration that may carry the watch marker
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Type(TypeDeclaration),
    Method(MemberDeclaration),
    Constructor(MemberDeclaration),
    Field(FieldDeclaration),
    MarkerDeclaration(TypeDeclaration),
    MarkerMember(MemberDeclaration),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Type(_) => DeclarationKind::Type,
            Declaration::Method(_) => DeclarationKind::Method,
            Declaration::Constructor(_) => DeclarationKind::Constructor,
            Declaration::Field(_) => DeclarationKind::Field,
            Declaration::MarkerDeclaration(_) => DeclarationKind::MarkerDeclaration,
            Declaration::MarkerMember(_) => DeclarationKind::MarkerMember,
        }
    }

    pub fn header(&self) -> &DeclarationHeader {
        match self {
            Declaration::Type(decl) | Declaration::MarkerDeclaration(decl) => &decl.header,
            Declaration::Method(decl)
            | Declaration::Constructor(decl)
            | Declaration::MarkerMember(decl) => &decl.header,
            Declaration::Field(decl) => &decl.header,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.header().markers
    }

    pub fn span(&self) -> Option<Span> {
        self.header().span
    }

    /// Names declared by this node; fields may declare several
    pub fn names(&self) -> Vec<&str> {
        match self {
            Declaration::Type(decl) | Declaration::MarkerDeclaration(decl) => vec![&decl.name],
            Declaration::Method(decl)
            | Declaration::Constructor(decl)
            | Declaration::MarkerMember(decl) => vec![&decl.name],
            Declaration::Field(decl) => decl.variables.iter().map(|v| v.name.as_str()).collect(),
        }
    }

    /// Label for messages: the names joined with `, `
    pub fn display_name(&self) -> String {
        self.names().join(", ")
    }

    /// Nested declarations in source order
    pub fn members(&self) -> &[Declaration] {
        match self {
            Declaration::Type(decl) | Declaration::MarkerDeclaration(decl) => &decl.members,
            Declaration::Method(decl)
            | Declaration::Constructor(decl)
            | Declaration::MarkerMember(decl) => &decl.members,
            Declaration::Field(decl) => &decl.members,
        }
    }

    // Builders used by parsers and tests

    pub fn type_decl(name: impl Into<String>, header: DeclarationHeader) -> Self {
        Declaration::Type(TypeDeclaration {
            name: name.into(),
            header,
            members: Vec::new(),
        })
    }

    pub fn method(name: impl Into<String>, header: DeclarationHeader) -> Self {
        Declaration::Method(MemberDeclaration {
            name: name.into(),
            header,
            members: Vec::new(),
        })
    }

    pub fn constructor(name: impl Into<String>, header: DeclarationHeader) -> Self {
        Declaration::Constructor(MemberDeclaration {
            name: name.into(),
            header,
            members: Vec::new(),
        })
    }

    pub fn field(header: DeclarationHeader, value_type: TypeRef, variables: Vec<Variable>) -> Self {
        Declaration::Field(FieldDeclaration {
            header,
            value_type,
            variables,
            members: Vec::new(),
        })
    }

    /// Replace the nested declarations
    pub fn with_members(mut self, members: Vec<Declaration>) -> Self {
        match &mut self {
            Declaration::Type(decl) | Declaration::MarkerDeclaration(decl) => decl.members = members,
            Declaration::Method(decl)
            | Declaration::Constructor(decl)
            | Declaration::MarkerMember(decl) => decl.members = members,
            Declaration::Field(decl) => decl.members = members,
        }
        self
    }
}
