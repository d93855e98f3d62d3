//! Watcher Resolution Table
//!
//! Maps `static final String` constants of one source unit to the watcher
//! lists they hold. Built in a single pass in declaration order, so a
//! reference may only name a constant declared earlier.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::entities::{Declaration, Expression, FieldDeclaration, SourceTree, Variable};
use crate::error::{HeraldError, HeraldResult};

/// Constant name → watcher list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatcherTable {
    entries: HashMap<String, Vec<String>>,
}

impl WatcherTable {
    /// Scan every field of `tree`, at any depth, in source order
    pub fn build(tree: &SourceTree) -> HeraldResult<Self> {
        let mut fields = Vec::new();
        tree.walk(&mut |decl| {
            if let Declaration::Field(field) = decl {
                fields.push(field);
            }
        });

        let mut table = Self::default();
        for field in fields {
            table.record_field(field)?;
        }
        Ok(table)
    }

    /// Watcher list recorded for `name`
    pub fn resolve(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record_field(&mut self, field: &FieldDeclaration) -> HeraldResult<()> {
        let modifiers = field.header.modifiers;
        if !(modifiers.is_static && modifiers.is_final) {
            return Ok(());
        }
        if !field.value_type.is_string() {
            trace!(
                field = %field.variables.iter().map(|v| v.name.as_str()).collect::<Vec<_>>().join(", "),
                value_type = %field.value_type.name,
                "skipping non-string constant"
            );
            return Ok(());
        }

        for variable in &field.variables {
            let watchers = self.watchers_of(field.value_type.dimensions, variable)?;
            self.insert(&variable.name, watchers)?;
        }
        Ok(())
    }

    fn watchers_of(&self, type_dimensions: usize, variable: &Variable) -> HeraldResult<Vec<String>> {
        let shape = |reason: &str| HeraldError::DeclarationShape {
            name: variable.name.clone(),
            reason: reason.to_string(),
        };

        if variable.dimensions > 0 {
            return Err(shape("array dimensions must be declared on the type"));
        }
        if type_dimensions > 1 {
            return Err(shape("multi-dimensional arrays are not supported"));
        }
        let is_array = type_dimensions == 1;

        let initializer = variable
            .initializer
            .as_ref()
            .ok_or_else(|| shape("missing initializer"))?;

        match initializer {
            Expression::Name(target) => self.lookup(target),
            Expression::StringLiteral(value) if !is_array => Ok(vec![value.clone()]),
            Expression::StringLiteral(_) => Err(shape("array constant needs an array initializer")),
            Expression::Array(items) if is_array => items
                .iter()
                .map(|item| match item {
                    Expression::StringLiteral(value) => Ok(value.clone()),
                    other => Err(shape(&format!(
                        "array element {} is not a string literal",
                        other.describe()
                    ))),
                })
                .collect(),
            Expression::Array(_) => Err(shape("array initializer on a non-array constant")),
            Expression::Other(text) => Err(shape(&format!("unsupported initializer {}", text))),
        }
    }

    fn lookup(&self, target: &str) -> HeraldResult<Vec<String>> {
        match self.entries.get(target) {
            Some(watchers) if !watchers.is_empty() => Ok(watchers.clone()),
            _ => Err(HeraldError::UndefinedReference {
                name: target.to_string(),
            }),
        }
    }

    fn insert(&mut self, name: &str, watchers: Vec<String>) -> HeraldResult<()> {
        if self.entries.contains_key(name) {
            return Err(HeraldError::DuplicateDefinition {
                name: name.to_string(),
            });
        }
        trace!(constant = name, watchers = ?watchers, "recorded watcher constant");
        self.entries.insert(name.to_string(), watchers);
        Ok(())
    }
}
