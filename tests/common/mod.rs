//! Shared helpers for Herald integration tests.
//!
//! - `fixtures`: Java sources used across scenarios
//! - `cli`: run the `herald` binary in an isolated environment

#![allow(dead_code)]

pub mod cli;
pub mod fixtures;

pub use cli::*;
pub use fixtures::*;

use herald::{AnnotatedRegion, JavaSourceParser, MarkerName, RegionExtractor, SourceCode};

/// Extractor for the default marker
pub fn extractor() -> RegionExtractor<JavaSourceParser> {
    RegionExtractor::new(JavaSourceParser::new(), MarkerName::default())
}

/// Regions of `text` parsed as `name`
pub fn regions(name: &str, text: &str) -> Vec<AnnotatedRegion> {
    extractor()
        .extract(&SourceCode::from_content(name, text))
        .unwrap_or_else(|err| panic!("extracting {name} failed: {err}"))
}
