//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `parser/` - Java source parser (tree-sitter)
//! - `walker/` - Revision walkers (git, on-disk snapshots)
//! - `notifiers/` - Change notifiers (console, JSON, per-watcher digest)

pub mod notifiers;
pub mod parser;
pub mod walker;

// Re-export for convenience
pub use notifiers::{
    available_notifiers, notifier_by_name, ConsoleNotifier, DigestNotifier, JsonNotifier,
    NotifierOptions,
};
pub use parser::JavaSourceParser;
pub use walker::{available_walkers, GitWalker, SnapshotWalker};
