//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod change_notifier;
pub mod revision_walker;
pub mod source_parser;

pub use change_notifier::{ChangeNotifier, FileContext};
pub use revision_walker::{FileRevision, ProjectInfo, RevisionWalker};
pub use source_parser::SourceParser;
