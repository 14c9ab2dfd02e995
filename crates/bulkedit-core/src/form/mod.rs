//! Form-state collaborator.
//!
//! The selection controller only ever reads the key set of a form-state
//! store and removes entries from it; `FormStateStore` is that surface.
//! `FormState` is an in-memory store driven by `FormAction`s.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, btree_map::Entry};

///
/// FormStateStore
///

pub trait FormStateStore {
    /// Snapshot of the currently tracked field paths.
    fn keys(&self) -> Vec<String>;

    /// Drop the entry at `path`. Removing an absent path is a no-op.
    fn remove(&mut self, path: &str);
}

///
/// FieldState
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub value: JsonValue,
    pub initial_value: JsonValue,
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FieldState {
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self {
            initial_value: value.clone(),
            value,
            valid: true,
            error_message: None,
        }
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value != self.initial_value
    }
}

///
/// FormAction
///

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    /// Set the value at `path`, creating the entry if needed.
    Update { path: String, value: JsonValue },
    Remove { path: String },
    /// Replace the whole state.
    Reset { fields: BTreeMap<String, FieldState> },
}

///
/// FormState
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormState {
    fields: BTreeMap<String, FieldState>,
}

impl FormState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::Update { path, value } => {
                tracing::trace!(%path, "form update");
                match self.fields.entry(path) {
                    Entry::Occupied(mut entry) => entry.get_mut().value = value,
                    Entry::Vacant(entry) => {
                        entry.insert(FieldState::new(value));
                    }
                }
            }
            FormAction::Remove { path } => {
                tracing::trace!(%path, "form remove");
                self.fields.remove(&path);
            }
            FormAction::Reset { fields } => {
                tracing::trace!(fields = fields.len(), "form reset");
                self.fields = fields;
            }
        }
    }

    /// Convenience for `dispatch(FormAction::Update { .. })`.
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<JsonValue>) {
        self.dispatch(FormAction::Update {
            path: path.into(),
            value: value.into(),
        });
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldState> {
        self.fields.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Values keyed by path, for submitting the edited subset.
    #[must_use]
    pub fn values(&self) -> BTreeMap<&str, &JsonValue> {
        self.fields
            .iter()
            .map(|(path, state)| (path.as_str(), &state.value))
            .collect()
    }
}

impl FormStateStore for FormState {
    fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn remove(&mut self, path: &str) {
        self.dispatch(FormAction::Remove {
            path: path.to_string(),
        });
    }
}

///
/// TESTS
///
