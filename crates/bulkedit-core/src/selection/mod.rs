//! Field selection with form-state repair.
//!
//! The controller owns the current selection snapshot. On every change it
//! may prune form-state entries whose field is no longer selected.

mod select;

pub use select::{FieldSelect, HEADING_KEY, SelectOption};

use crate::{
    flatten::FieldDescriptor,
    form::FormStateStore,
    obs::sink::{self, EngineEvent},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// SelectError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SelectError {
    #[error("option index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },
}

///
/// RepairPolicy
///
/// Decides when stale form-state entries are pruned after a selection
/// change.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RepairPolicy {
    /// Prune only when the selection was cleared or the number of tracked
    /// paths is strictly greater than the new selection. A same-size swap
    /// leaves the dropped field's entry in place.
    #[default]
    CountDecrease,

    /// Prune every tracked path that is not selected.
    SetDifference,
}

impl RepairPolicy {
    fn should_repair(self, tracked: usize, selection: Option<&[FieldDescriptor]>) -> bool {
        match (self, selection) {
            (_, None) => true,
            (Self::CountDecrease, Some(selected)) => tracked > selected.len(),
            (Self::SetDifference, Some(_)) => true,
        }
    }
}

///
/// SelectionChange
///
/// Outcome of one `on_selection_change` call.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionChange {
    /// Paths removed from the form state, in key order.
    pub removed: Vec<String>,
    /// Whether a repair pass ran at all.
    pub repaired: bool,
}

///
/// FieldSelectionController
///

#[derive(Clone, Debug, Default)]
pub struct FieldSelectionController {
    selected: Vec<FieldDescriptor>,
    policy: RepairPolicy,
}

impl FieldSelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_policy(policy: RepairPolicy) -> Self {
        Self {
            selected: Vec::new(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> RepairPolicy {
        self.policy
    }

    /// Current selection, in the order the presenter supplied it.
    #[must_use]
    pub fn selected(&self) -> &[FieldDescriptor] {
        &self.selected
    }

    #[must_use]
    pub fn selected_paths(&self) -> Vec<&str> {
        self.selected.iter().map(|d| d.path.as_str()).collect()
    }

    /// Replace the selection and run the repair pass against `form`.
    ///
    /// `None` clears the selection and always repairs. Otherwise the
    /// configured `RepairPolicy` decides whether unselected paths are
    /// removed.
    pub fn on_selection_change<S>(
        &mut self,
        selection: Option<Vec<FieldDescriptor>>,
        form: &mut S,
    ) -> SelectionChange
    where
        S: FormStateStore + ?Sized,
    {
        let tracked = form.keys();
        let repaired = self.policy.should_repair(tracked.len(), selection.as_deref());

        let mut removed = Vec::new();
        if repaired {
            let keep: BTreeSet<&str> = selection
                .iter()
                .flatten()
                .map(|d| d.path.as_str())
                .collect();

            for path in tracked {
                if !keep.contains(path.as_str()) {
                    tracing::trace!(%path, "removing unselected field from form state");
                    form.remove(&path);
                    removed.push(path);
                }
            }
        }

        self.selected = selection.unwrap_or_default();

        sink::record(EngineEvent::SelectionChange {
            selected: self.selected.len() as u64,
            removed: removed.len() as u64,
            repaired,
        });
        tracing::debug!(
            selected = self.selected.len(),
            removed = removed.len(),
            repaired,
            policy = ?self.policy,
            "selection changed"
        );

        SelectionChange { removed, repaired }
    }
}

///
/// TESTS
///
