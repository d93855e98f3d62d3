//! Domain Entities
//!
//! - `SourceCode` - One revision of a logical file
//! - `SourceTree` - Declaration tree produced by a parser
//! - `AnnotatedRegion` - A watched declaration with its watchers
//! - `ChangeReport` - Added/removed/modified regions of one file

mod change_report;
mod region;
mod source_code;
mod source_tree;

pub use change_report::{ChangeKind, ChangeReport, RegionChange};
pub use region::{AnnotatedRegion, RegionKey};
pub use source_code::SourceCode;
pub use source_tree::{
    Declaration, DeclarationHeader, DocComment, Expression, FieldDeclaration, Import, Marker,
    MarkerArguments, MemberDeclaration, Modifiers, SourceTree, TypeDeclaration, TypeRef, Variable,
};
