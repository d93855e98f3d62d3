//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod declaration_kind;
mod marker_name;
mod span;

pub use declaration_kind::DeclarationKind;
pub use marker_name::{MarkerName, DEFAULT_MARKER_NAME, DEFAULT_MARKER_PACKAGE};
pub use span::{Position, Span};
