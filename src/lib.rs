//! Herald - watch annotated declarations across revisions
//!
//! Herald finds declarations carrying a watch marker (by default
//! `@herald.annotations.NotifyChanges`) in two revisions of a Java source
//! tree, works out which of them were added, removed or modified, and tells
//! the watchers listed in each marker.
//!
//! ## Layers
//!
//! - `domain` - Regions, watcher resolution and the diff engine (no I/O)
//! - `application` - Extraction and the processing loop
//! - `infrastructure` - Java parser, git/snapshot walkers, notifiers
//! - `config` - Layered TOML configuration
//! - `presentation` / `ui` - Command-line definition and terminal rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{ProcessUseCase, RegionExtractor, RunSummary};
pub use config::Config;
pub use domain::entities::{AnnotatedRegion, ChangeReport, RegionChange, SourceCode};
pub use domain::value_objects::{DeclarationKind, MarkerName, Span};
pub use error::{HeraldError, HeraldResult};
pub use infrastructure::{GitWalker, JavaSourceParser, SnapshotWalker};
