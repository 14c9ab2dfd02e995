//! Core runtime for BulkEdit: schema flattening, field selection with
//! form-state repair, column state, presenter identity and observability.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod column;
pub mod config;
pub mod error;
pub mod flatten;
pub mod form;
pub mod identity;
pub mod obs;
pub mod selection;
pub mod translate;

pub use bulkedit_schema::{self as schema, path};

///
/// CONSTANTS
///

/// Accessor of the row-selection column. Always present, never offered for
/// toggling or reordering.
pub const SELECT_ACCESSOR: &str = "_select";

/// Separator between composite label parts.
pub const LABEL_SEPARATOR: &str = " > ";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        column::{Column, ColumnSelector, ColumnStore},
        flatten::{FieldDescriptor, flatten},
        form::{FormState, FormStateStore},
        identity::PresenterKey,
        selection::{FieldSelect, FieldSelectionController, RepairPolicy},
        translate::Translate,
    };
    pub use bulkedit_schema::prelude::*;
}
