//! Region extraction
//!
//! Parse one revision of a file and collect its annotated regions.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{AnnotatedRegion, SourceCode};
use crate::domain::ports::SourceParser;
use crate::domain::services::DeclarationCollector;
use crate::domain::value_objects::MarkerName;
use crate::error::HeraldResult;

/// Parser plus collector for one marker
pub struct RegionExtractor<P: SourceParser> {
    parser: P,
    collector: DeclarationCollector,
}

impl<P: SourceParser> RegionExtractor<P> {
    pub fn new(parser: P, marker: MarkerName) -> Self {
        Self {
            parser,
            collector: DeclarationCollector::new(marker),
        }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn marker(&self) -> &MarkerName {
        self.collector.marker()
    }

    /// Regions of an already decoded source unit
    pub fn extract(&self, source: &SourceCode) -> HeraldResult<Vec<AnnotatedRegion>> {
        let tree = self.parser.parse(source)?;
        debug!(
            unit = source.name(),
            declarations = tree.declarations.len(),
            imports = tree.imports.len(),
            "parsed source unit"
        );
        self.collector.collect(source, &tree)
    }

    /// Regions of raw revision content
    pub fn extract_bytes(&self, path: &Path, bytes: Vec<u8>) -> HeraldResult<Vec<AnnotatedRegion>> {
        let source = SourceCode::from_bytes(path, bytes)?;
        self.extract(&source)
    }
}
