//! Domain Layer
//!
//! Pure extraction and diff logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Source units, declaration trees, regions, change reports
//! - `value_objects/` - Immutable value types (Span, DeclarationKind, MarkerName)
//! - `services/` - Watcher table, marker extractor, collector, diff engine
//! - `ports/` - Interface definitions for parsers, walkers and notifiers

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
