//! Schema validation orchestration and shared helpers.

pub mod naming;
pub mod paths;

use crate::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// SchemaErrors
///
/// Validation messages keyed by node route (`[0].fields[2]`).
///

#[derive(Clone, Debug, Default, Eq, PartialEq, ThisError)]
#[error("schema validation failed: {}", render(.errors))]
pub struct SchemaErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl SchemaErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(route.into())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn get(&self, route: &str) -> Option<&[String]> {
        self.errors.get(route).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(route, msgs)| msgs.iter().map(move |m| (route.as_str(), m.as_str())))
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn render(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .flat_map(|(route, msgs)| msgs.iter().map(move |m| format!("{route}: {m}")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Run full schema validation in a staged, deterministic order.
pub fn validate_fields(fields: &[FieldNode]) -> Result<(), SchemaErrors> {
    let mut errors = SchemaErrors::new();

    // Phase 1: node-local rules.
    naming::validate_names(fields, &mut errors);

    // Phase 2: tree-wide path uniqueness.
    paths::validate_unique_paths(fields, &mut errors);

    if !errors.is_empty() {
        tracing::warn!(errors = errors.len(), "schema validation failed");
    }

    errors.result()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_message_with_its_route() {
        let mut errs = SchemaErrors::new();
        errs.add("[1]", "b");
        errs.add("[0]", "a");
        errs.add("[0]", "c");

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.to_string(),
            "schema validation failed: [0]: a; [0]: c; [1]: b"
        );
    }

    #[test]
    fn valid_tree_passes() {
        let fields = vec![
            LeafField::text("title").into(),
            GroupField::group("address", vec![LeafField::text("city").into()]).into(),
            TabsField::new(vec![Tab::unnamed(vec![LeafField::text("summary").into()])]).into(),
        ];

        assert!(validate_fields(&fields).is_ok());
    }
}
