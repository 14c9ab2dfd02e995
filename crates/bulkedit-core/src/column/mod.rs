//! Column state.
//!
//! An ordered, in-session sequence of columns with toggle and reorder.
//! Operations never clamp: invalid input is rejected with a `ColumnError`
//! and the sequence is left untouched.

mod build;
mod selector;


pub use selector::{ChipIcon, ColumnChip, ColumnSelector, DragEnd};

use crate::{
    SELECT_ACCESSOR,
    obs::sink::{self, EngineEvent},
};
use bulkedit_schema::types::Label;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ColumnError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ColumnError {
    #[error("unknown column accessor '{accessor}'")]
    UnknownAccessor { accessor: String },

    #[error("column index {index} is out of range for {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("column '{accessor}' is reserved and cannot be changed")]
    ReservedColumn { accessor: String },
}

///
/// Column
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub accessor: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    pub active: bool,
}

impl Column {
    /// A named column whose accessor is its name.
    #[must_use]
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        let name = name.into();

        Self {
            accessor: name.clone(),
            name: Some(name),
            label: None,
            active,
        }
    }

    /// The row-selection column for `accessor`.
    #[must_use]
    pub fn reserved(accessor: impl Into<String>) -> Self {
        Self {
            name: None,
            accessor: accessor.into(),
            label: None,
            active: true,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }
}

///
/// ColumnStore
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnStore {
    columns: Vec<Column>,
    reserved: String,
}

impl ColumnStore {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_reserved(columns, SELECT_ACCESSOR)
    }

    #[must_use]
    pub fn with_reserved(columns: Vec<Column>, reserved: impl Into<String>) -> Self {
        Self {
            columns,
            reserved: reserved.into(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn reserved_accessor(&self) -> &str {
        &self.reserved
    }

    #[must_use]
    pub fn is_reserved(&self, column: &Column) -> bool {
        column.accessor == self.reserved
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn get(&self, accessor: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.accessor == accessor)
    }

    /// Columns offered to a presenter for toggle and reorder.
    pub fn interactive_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !self.is_reserved(c))
    }

    #[must_use]
    pub fn active_accessors(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.active)
            .map(|c| c.accessor.as_str())
            .collect()
    }

    /// Replace the whole sequence, e.g. when a new schema is supplied.
    pub fn reset(&mut self, columns: Vec<Column>) {
        tracing::debug!(columns = columns.len(), "column state reset");
        self.columns = columns;
    }

    // ======================================================================
    // Toggle
    // ======================================================================

    /// Flip `active` on the column with this accessor and return its new
    /// value.
    pub fn toggle_column(&mut self, accessor: &str) -> Result<bool, ColumnError> {
        if accessor == self.reserved {
            return Err(reject(ColumnError::ReservedColumn {
                accessor: accessor.to_string(),
            }));
        }

        let Some(column) = self.columns.iter_mut().find(|c| c.accessor == accessor) else {
            return Err(reject(ColumnError::UnknownAccessor {
                accessor: accessor.to_string(),
            }));
        };

        column.active = !column.active;
        let active = column.active;

        sink::record(EngineEvent::ColumnToggle);
        tracing::debug!(accessor, active, "column toggled");

        Ok(active)
    }

    // ======================================================================
    // Move
    // ======================================================================

    /// Remove the column at `from` and reinsert it at `to`, both indices
    /// into the full sequence. The reserved column cannot be moved.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<(), ColumnError> {
        let len = self.columns.len();
        check_index(from, len)?;
        check_index(to, len)?;

        if self.is_reserved(&self.columns[from]) {
            return Err(reject(ColumnError::ReservedColumn {
                accessor: self.reserved.clone(),
            }));
        }

        move_within(&mut self.columns, from, to);

        sink::record(EngineEvent::ColumnMove);
        tracing::debug!(from, to, "column moved");

        Ok(())
    }

    /// Like `move_column`, with indices into `interactive_columns()`.
    /// Reserved columns keep their absolute positions.
    pub fn move_interactive(&mut self, from: usize, to: usize) -> Result<(), ColumnError> {
        let slots: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !self.is_reserved(c))
            .map(|(i, _)| i)
            .collect();
        check_index(from, slots.len())?;
        check_index(to, slots.len())?;

        let mut interactive: Vec<Column> = slots.iter().map(|&i| self.columns[i].clone()).collect();
        move_within(&mut interactive, from, to);

        for (slot, column) in slots.into_iter().zip(interactive) {
            self.columns[slot] = column;
        }

        sink::record(EngineEvent::ColumnMove);
        tracing::debug!(from, to, "interactive column moved");

        Ok(())
    }
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

fn check_index(index: usize, len: usize) -> Result<(), ColumnError> {
    if index < len {
        Ok(())
    } else {
        Err(reject(ColumnError::IndexOutOfRange { index, len }))
    }
}

fn reject(err: ColumnError) -> ColumnError {
    sink::record(EngineEvent::ColumnRejected);
    tracing::warn!(error = %err, "column operation rejected");

    err
}
