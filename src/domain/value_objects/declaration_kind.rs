//! Declaration kinds that can carry the watch marker

use serde::Serialize;

/// Category of a watched declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// Class, interface, enum or record
    Type,
    Method,
    Constructor,
    /// One variable of a field declaration
    Field,
    /// An annotation type (`@interface`)
    MarkerDeclaration,
    /// An element of an annotation type
    MarkerMember,
}

impl DeclarationKind {
    /// All kinds, in reporting order
    pub fn all() -> &'static [DeclarationKind] {
        &[
            DeclarationKind::Type,
            DeclarationKind::Method,
            DeclarationKind::Constructor,
            DeclarationKind::Field,
            DeclarationKind::MarkerDeclaration,
            DeclarationKind::MarkerMember,
        ]
    }

    /// Upper-case label used in rendered regions
    pub fn label(&self) -> &'static str {
        match self {
            DeclarationKind::Type => "TYPE",
            DeclarationKind::Method => "METHOD",
            DeclarationKind::Constructor => "CONSTRUCTOR",
            DeclarationKind::Field => "FIELD",
            DeclarationKind::MarkerDeclaration => "MARKER_DECLARATION",
            DeclarationKind::MarkerMember => "MARKER_MEMBER",
        }
    }

    /// Whether declarations of this kind open a new naming scope
    pub fn opens_scope(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Type | DeclarationKind::MarkerDeclaration
        )
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
