//! Marker Extractor
//!
//! Finds the watch marker on a declaration and returns its raw watcher
//! arguments. Purely syntactic: references are passed through unresolved.

use crate::domain::entities::{Declaration, Expression, Marker, MarkerArguments, SourceTree};
use crate::domain::value_objects::MarkerName;
use crate::error::{HeraldError, HeraldResult};

/// One raw marker argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherRef {
    /// `"alice"`
    Literal(String),
    /// `TEAM`, resolved later through the watcher table
    Reference(String),
}

/// Marker matcher bound to one source unit's imports
#[derive(Debug, Clone)]
pub struct MarkerExtractor<'a> {
    marker: &'a MarkerName,
    qualified: String,
    imported: bool,
}

impl<'a> MarkerExtractor<'a> {
    /// Decide the matching mode from the unit's package and imports
    ///
    /// The simple name is accepted when the marker is imported explicitly,
    /// through an on-demand import of its package, or when the unit lives in
    /// the marker's own package.
    pub fn for_unit(marker: &'a MarkerName, tree: &SourceTree) -> Self {
        let qualified = marker.qualified_name();
        let same_package = tree.package.as_deref().unwrap_or("") == marker.package();
        let imported = same_package
            || tree.imports.iter().any(|import| {
                !import.is_static
                    && if import.on_demand {
                        import.path == marker.package()
                    } else {
                        import.path == qualified
                    }
            });

        Self {
            marker,
            qualified,
            imported,
        }
    }

    /// Whether the simple name alone identifies the marker in this unit
    pub fn simple_name_visible(&self) -> bool {
        self.imported
    }

    /// Watcher arguments of the first matching marker, if any
    pub fn try_extract(&self, decl: &Declaration) -> HeraldResult<Option<Vec<WatcherRef>>> {
        let Some(marker) = decl.markers().iter().find(|m| self.matches(m)) else {
            return Ok(None);
        };

        let unsupported = |reason: String| HeraldError::UnsupportedArgumentShape {
            marker: self.marker.simple_name().to_string(),
            declaration: decl.display_name(),
            reason,
        };

        let value = match &marker.arguments {
            MarkerArguments::Single(value) => value,
            MarkerArguments::None => {
                return Err(unsupported("a watcher list argument is required".into()))
            }
            MarkerArguments::Named(pairs) if pairs.is_empty() => {
                return Err(unsupported("a watcher list argument is required".into()))
            }
            MarkerArguments::Named(_) => {
                return Err(unsupported("named parameters are not supported".into()))
            }
        };

        let refs = match value {
            Expression::Array(items) => items
                .iter()
                .map(|item| to_ref(item).ok_or_else(|| unsupported(element_reason(item))))
                .collect::<HeraldResult<Vec<_>>>()?,
            single => vec![to_ref(single).ok_or_else(|| unsupported(element_reason(single)))?],
        };
        Ok(Some(refs))
    }

    fn matches(&self, marker: &Marker) -> bool {
        let name = marker.name.as_str();
        name == self.qualified || (self.imported && name == self.marker.simple_name())
    }
}

fn to_ref(expr: &Expression) -> Option<WatcherRef> {
    match expr {
        Expression::StringLiteral(value) => Some(WatcherRef::Literal(value.clone())),
        Expression::Name(name) => Some(WatcherRef::Reference(name.clone())),
        Expression::Array(_) | Expression::Other(_) => None,
    }
}

fn element_reason(expr: &Expression) -> String {
    format!(
        "{} is not a string literal or constant name",
        expr.describe()
    )
}
