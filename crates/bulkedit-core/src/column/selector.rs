use crate::{
    column::{Column, ColumnError, ColumnStore},
    identity::{ColumnRef, InstanceId, InstanceIdSource, PresenterKey},
    translate::Translate,
};
use bulkedit_schema::types::Label;
use serde::{Deserialize, Serialize};

///
/// DragEnd
///
/// Payload of a drag-sequencing drop, in interactive indices.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DragEnd {
    #[serde(rename = "moveFromIndex")]
    pub from: usize,
    #[serde(rename = "moveToIndex")]
    pub to: usize,
}

///
/// ChipIcon
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChipIcon {
    /// Shown on inactive columns.
    Add,
    /// Shown on active columns.
    Remove,
}

///
/// ColumnChip
///
/// One toggleable, draggable pill.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnChip {
    pub id: String,
    pub key: PresenterKey,
    pub label: String,
    pub active: bool,
    pub aria_checked: bool,
    pub icon: ChipIcon,
}

///
/// ColumnSelector
///
/// Presenter model for the column chooser. Holds only identity; the column
/// state itself lives in a `ColumnStore`.
///

#[derive(Clone, Debug)]
pub struct ColumnSelector {
    owner: String,
    depth: usize,
    instance: InstanceId,
}

impl ColumnSelector {
    /// `owner` is the collection the columns belong to; `depth` is the
    /// nesting depth of the editor rendering this selector.
    #[must_use]
    pub fn new<I>(owner: impl Into<String>, depth: usize, ids: &I) -> Self
    where
        I: InstanceIdSource + ?Sized,
    {
        Self {
            owner: owner.into(),
            depth,
            instance: ids.next_id(),
        }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Chips for every interactive column, in sequence order. The key's
    /// index fallback is the column's position in the full sequence.
    #[must_use]
    pub fn chips<T>(&self, store: &ColumnStore, translate: &T) -> Vec<ColumnChip>
    where
        T: Translate + ?Sized,
    {
        store
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| !store.is_reserved(column))
            .map(|(i, column)| ColumnChip {
                id: column.accessor.clone(),
                key: self.key(column, i),
                label: column_label(column, translate),
                active: column.active,
                aria_checked: column.active,
                icon: if column.active {
                    ChipIcon::Remove
                } else {
                    ChipIcon::Add
                },
            })
            .collect()
    }

    /// Ids handed to the drag-sequencing component.
    #[must_use]
    pub fn ids<'a>(&self, store: &'a ColumnStore) -> Vec<&'a str> {
        store
            .interactive_columns()
            .map(|c| c.accessor.as_str())
            .collect()
    }

    pub fn on_drag_end(&self, store: &mut ColumnStore, drop: DragEnd) -> Result<(), ColumnError> {
        store.move_interactive(drop.from, drop.to)
    }

    pub fn on_click(&self, store: &mut ColumnStore, accessor: &str) -> Result<bool, ColumnError> {
        store.toggle_column(accessor)
    }

    fn key(&self, column: &Column, index: usize) -> PresenterKey {
        PresenterKey::new(
            self.owner.clone(),
            ColumnRef::new(column.name.as_deref(), index),
            self.depth,
            self.instance.clone(),
        )
    }
}

fn column_label<T>(column: &Column, translate: &T) -> String
where
    T: Translate + ?Sized,
{
    match &column.label {
        Some(Label::Text(text)) if text.is_empty() => {}
        Some(label) => return translate.translate_label(label),
        None => {}
    }

    translate.translate(column.name.as_deref().unwrap_or(&column.accessor))
}

///
/// TESTS
///
