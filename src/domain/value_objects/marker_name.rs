//! Marker name value object
//!
//! The watch marker is identified by its fully-qualified annotation name.
//! Depending on a unit's imports it may appear under its simple name.

use std::fmt;

/// Default package of the watch marker annotation
pub const DEFAULT_MARKER_PACKAGE: &str = "herald.annotations";

/// Default simple name of the watch marker annotation
pub const DEFAULT_MARKER_NAME: &str = "NotifyChanges";

/// Fully-qualified name of the watch marker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerName {
    package: String,
    simple: String,
}

impl MarkerName {
    /// Create from a package (may be empty) and a simple name
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple: simple.into(),
        }
    }

    /// Split a dotted name at its last segment
    ///
    /// `"a.b.Watch"` becomes package `a.b`, simple name `Watch`.
    pub fn parse(qualified: &str) -> Self {
        let qualified = qualified.trim().trim_start_matches('@');
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", qualified),
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.simple
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

impl Default for MarkerName {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PACKAGE, DEFAULT_MARKER_NAME)
    }
}

impl fmt::Display for MarkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
