//! Domain Services
//!
//! Pure logic over parsed source units. No I/O.

mod change_builder;
mod collector;
mod differ;
mod marker_extractor;
mod watcher_table;

pub use change_builder::ChangeBuilder;
pub use collector::DeclarationCollector;
pub use differ::{DiffLine, DiffResult, DiffTag, Differ};
pub use marker_extractor::{MarkerExtractor, WatcherRef};
pub use watcher_table::WatcherTable;
