//! Declaration Collector
//!
//! Walks a parsed unit and turns every marked declaration into an
//! [`AnnotatedRegion`], resolving constant references through the unit's
//! [`WatcherTable`].

use tracing::debug;

use crate::domain::entities::{AnnotatedRegion, Declaration, SourceCode, SourceTree};
use crate::domain::services::marker_extractor::{MarkerExtractor, WatcherRef};
use crate::domain::services::watcher_table::WatcherTable;
use crate::domain::value_objects::MarkerName;
use crate::error::{HeraldError, HeraldResult};

/// Produces the ordered region list of one source unit
#[derive(Debug, Clone, Default)]
pub struct DeclarationCollector {
    marker: MarkerName,
}

impl DeclarationCollector {
    pub fn new(marker: MarkerName) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> &MarkerName {
        &self.marker
    }

    /// Regions of `tree` in depth-first source order
    pub fn collect(&self, source: &SourceCode, tree: &SourceTree) -> HeraldResult<Vec<AnnotatedRegion>> {
        let table = WatcherTable::build(tree)?;
        let walk = Walk {
            source,
            table: &table,
            extractor: MarkerExtractor::for_unit(&self.marker, tree),
        };

        let mut regions = Vec::new();
        let mut scope = Vec::new();
        for decl in &tree.declarations {
            walk.visit(decl, &mut scope, &mut regions)?;
        }

        debug!(
            unit = source.name(),
            constants = table.len(),
            regions = regions.len(),
            "collected annotated regions"
        );
        Ok(regions)
    }
}

struct Walk<'a> {
    source: &'a SourceCode,
    table: &'a WatcherTable,
    extractor: MarkerExtractor<'a>,
}

impl Walk<'_> {
    fn visit(
        &self,
        decl: &Declaration,
        scope: &mut Vec<String>,
        regions: &mut Vec<AnnotatedRegion>,
    ) -> HeraldResult<()> {
        let scope_name = scope.join(".");

        if let Some(refs) = self.extractor.try_extract(decl)? {
            let watchers = self.resolve(&refs)?;
            for name in decl.names() {
                let region = AnnotatedRegion::from_declaration(
                    self.source,
                    decl,
                    name,
                    &scope_name,
                    Some(watchers.clone()),
                )?;
                debug!(region = %region, "found annotated region");
                regions.push(region);
            }
        }

        // Members of a type live in its scope. Local and anonymous types
        // inside methods are scoped under the method name.
        let pushed = match decl {
            Declaration::Field(_) => false,
            _ if decl.members().is_empty() => false,
            _ => {
                scope.push(decl.display_name());
                true
            }
        };
        for member in decl.members() {
            self.visit(member, scope, regions)?;
        }
        if pushed {
            scope.pop();
        }
        Ok(())
    }

    fn resolve(&self, refs: &[WatcherRef]) -> HeraldResult<Vec<String>> {
        let mut watchers = Vec::with_capacity(refs.len());
        for watcher in refs {
            match watcher {
                WatcherRef::Literal(value) => watchers.push(value.clone()),
                WatcherRef::Reference(name) => {
                    let list = self
                        .table
                        .resolve(name)
                        .ok_or_else(|| HeraldError::UndefinedReference { name: name.clone() })?;
                    watchers.extend(list.iter().cloned());
                }
            }
        }
        Ok(watchers)
    }
}
