//! AnnotatedRegion entity
//!
//! One watched declaration of one revision: what it is, where it is, the
//! lines it covers and who wants to hear about it. Regions are built fresh
//! for every parse and never mutated.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::{Declaration, SourceCode};
use crate::domain::value_objects::{DeclarationKind, Span};
use crate::error::{HeraldError, HeraldResult};

/// Cross-revision identity of a region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionKey {
    pub kind: DeclarationKind,
    /// Dotted chain of enclosing declarations, empty at top level
    pub scope: String,
    pub name: String,
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope.is_empty() {
            write!(f, "{} {}", self.kind, self.name)
        } else {
            write!(f, "{} {}.{}", self.kind, self.scope, self.name)
        }
    }
}

/// A marked declaration with its resolved watchers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRegion {
    kind: DeclarationKind,
    name: String,
    scope: String,
    span: Span,
    content: Vec<String>,
    watchers: Vec<String>,
}

impl AnnotatedRegion {
    /// Build the region for one declared `name` of `decl`
    ///
    /// The span starts at the leading doc comment when one is attached.
    pub fn from_declaration(
        source: &SourceCode,
        decl: &Declaration,
        name: &str,
        scope: &str,
        watchers: Option<Vec<String>>,
    ) -> HeraldResult<Self> {
        let header = decl.header();
        let missing = || HeraldError::MissingPosition {
            name: qualify(scope, name),
        };

        let mut span = header.span.ok_or_else(missing)?;
        if let Some(doc) = &header.doc {
            let doc_span = doc.span.ok_or_else(missing)?;
            span = doc_span.cover(&span);
        }

        let watchers = watchers.ok_or_else(|| HeraldError::InvalidWatcherList {
            name: qualify(scope, name),
        })?;

        Ok(Self {
            kind: decl.kind(),
            name: name.to_string(),
            scope: scope.to_string(),
            content: source.slice(&span),
            span,
            watchers,
        })
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn watchers(&self) -> &[String] {
        &self.watchers
    }

    /// `scope.name`, or just `name` at top level
    pub fn qualified_name(&self) -> String {
        qualify(&self.scope, &self.name)
    }

    pub fn identity(&self) -> RegionKey {
        RegionKey {
            kind: self.kind,
            scope: self.scope.clone(),
            name: self.name.clone(),
        }
    }

    /// Content joined into one newline-terminated text
    pub fn text(&self) -> String {
        let mut text = self.content.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for AnnotatedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' {} [{}]",
            self.kind,
            self.qualified_name(),
            self.span,
            self.watchers.join(", ")
        )
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}
